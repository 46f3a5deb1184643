use chordgrid_core::{
    FretboardGrid, GridError, GridPos, InMemoryNoteRepository, NoteBatch, NoteRepository,
    NoteService, NoteServiceError, NoteStyle, NoteSymbol,
};

type Service = NoteService<InMemoryNoteRepository, FretboardGrid>;

fn setup() -> Service {
    NoteService::new(
        InMemoryNoteRepository::new(),
        FretboardGrid::new(6, 5).unwrap(),
    )
}

#[test]
fn empty_store_reports_absent_cells() {
    let service = setup();

    assert!(!service.has_note_at(GridPos::new(1, 1)));
    assert_eq!(service.get_note_at(GridPos::new(1, 1)), None);
    assert!(service.list_notes().is_empty());
}

#[test]
fn place_note_resolves_default_style() {
    let mut service = setup();

    let open = service.place_note(0, 1, NoteStyle::Default).unwrap();
    let fretted = service.place_note(2, 3, NoteStyle::Default).unwrap();

    assert_eq!(open.symbol, NoteSymbol::Circle);
    assert_eq!(fretted.symbol, NoteSymbol::Ball);
    assert_eq!(fretted.position, GridPos::new(2, 3));
    assert_eq!(fretted.span, 1);
    assert_eq!(fretted.area.to_string(), "3 / 4 / 4 / 5");
    assert_eq!(service.list_notes().len(), 2);
}

#[test]
fn placing_same_note_twice_keeps_one_record() {
    let mut service = setup();

    let first = service.place_note(3, 2, NoteSymbol::Square).unwrap();
    let second = service.place_note(3, 2, NoteSymbol::Square).unwrap();

    assert_eq!(first, second);
    assert_eq!(service.list_notes(), vec![first]);
}

#[test]
fn placement_overwrites_existing_symbol() {
    let mut service = setup();

    service.place_note(3, 2, NoteSymbol::Square).unwrap();
    service.place_note(3, 2, NoteSymbol::Cross).unwrap();

    let notes = service.list_notes();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].symbol, NoteSymbol::Cross);
}

#[test]
fn remove_note_is_noop_for_empty_cell() {
    let mut service = setup();
    service.place_note(1, 1, NoteStyle::Default).unwrap();

    assert!(!service.remove_note_at(GridPos::new(4, 4)));
    assert!(service.remove_note_at(GridPos::new(1, 1)));
    assert!(!service.has_note_at(GridPos::new(1, 1)));
    assert!(!service.remove_note_at(GridPos::new(1, 1)));
}

#[test]
fn place_note_rejects_off_board_coordinates() {
    let mut service = setup();

    let err = service.place_note(1, 6, NoteStyle::Default).unwrap_err();
    assert_eq!(
        err,
        NoteServiceError::Grid(GridError::StringOutOfRange {
            string: 6,
            strings_count: 6,
        })
    );
    let err = service.place_note(6, 0, NoteStyle::Default).unwrap_err();
    assert_eq!(
        err,
        NoteServiceError::Grid(GridError::FretOutOfRange {
            fret: 6,
            frets_count: 5,
        })
    );
    assert!(service.list_notes().is_empty());
}

#[test]
fn place_note_with_span_rejects_zero() {
    let mut service = setup();

    let err = service
        .place_note_with_span(1, 0, NoteSymbol::Ball, 0)
        .unwrap_err();
    assert_eq!(err, NoteServiceError::ZeroSpan { fret: 1, string: 0 });
}

#[test]
fn repository_commit_applies_batch_in_order() {
    let mut service = setup();
    let note = service.place_note(2, 2, NoteSymbol::Ball).unwrap();

    let mut repo = InMemoryNoteRepository::new();
    let mut batch = NoteBatch::new();
    batch.set(note.clone());
    batch.unset(note.position);
    batch.set(note.clone());
    assert_eq!(batch.len(), 3);
    repo.commit(batch);

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get_note_at(note.position), Some(note));

    repo.commit(NoteBatch::new());
    assert_eq!(repo.len(), 1);
}
