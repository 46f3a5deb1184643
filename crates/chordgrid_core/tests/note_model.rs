use chordgrid_core::{GridArea, GridPos, Note, NoteStyle, NoteSymbol};

fn sample_note() -> Note {
    Note {
        position: GridPos::new(1, 2),
        area: GridArea {
            row_start: 2,
            column_start: 3,
            row_end: 3,
            column_end: 6,
        },
        fret: 1,
        string: 2,
        symbol: NoteSymbol::BarreStart,
        span: 3,
        outline: false,
    }
}

#[test]
fn default_style_depends_on_fret() {
    assert_eq!(NoteStyle::Default.resolve(0), NoteSymbol::Circle);
    assert_eq!(NoteStyle::Default.resolve(1), NoteSymbol::Ball);
    assert_eq!(NoteStyle::Default.resolve(4), NoteSymbol::Ball);
    assert_eq!(
        NoteStyle::from(NoteSymbol::Diamond).resolve(0),
        NoteSymbol::Diamond
    );
}

#[test]
fn barre_tags_are_classified() {
    assert!(NoteSymbol::BarreStart.is_barre_node());
    assert!(!NoteSymbol::BarreStart.is_barre_continuation());
    assert!(NoteSymbol::BarreDummy.is_barre_continuation());
    assert!(NoteSymbol::BarreEnd.is_barre_continuation());
    assert!(!NoteSymbol::Ball.is_barre_node());
    assert!(!NoteSymbol::CrossOutline.is_barre_node());
}

#[test]
fn last_covered_string_counts_through_chain_end() {
    let note = sample_note();
    assert_eq!(note.last_covered_string(), 4);

    let tail = Note {
        string: 3,
        symbol: NoteSymbol::BarreDummy,
        span: 2,
        ..sample_note()
    };
    assert_eq!(tail.last_covered_string(), 4);
}

#[test]
fn grid_pos_orders_fret_major() {
    let mut positions = vec![
        GridPos::new(2, 0),
        GridPos::new(1, 5),
        GridPos::new(1, 0),
    ];
    positions.sort();
    assert_eq!(
        positions,
        vec![GridPos::new(1, 0), GridPos::new(1, 5), GridPos::new(2, 0)]
    );
    assert_eq!(GridPos::new(3, 4).to_string(), "f3s4");
}

#[test]
fn note_serialization_uses_ui_symbol_names() {
    let note = sample_note();

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["symbol"], "BARRE_START");
    assert_eq!(json["position"]["fret"], 1);
    assert_eq!(json["position"]["string"], 2);
    assert_eq!(json["area"]["column_end"], 6);
    assert_eq!(json["span"], 3);
    assert_eq!(json["outline"], false);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn missing_outline_field_defaults_to_filled() {
    let mut json = serde_json::to_value(sample_note()).unwrap();
    json.as_object_mut().unwrap().remove("outline");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert!(!decoded.outline);
}

#[test]
fn symbol_wire_names_match_as_str() {
    for symbol in [
        NoteSymbol::Blank,
        NoteSymbol::CircleOutline,
        NoteSymbol::TriangleOutline,
        NoteSymbol::BarreDummy,
        NoteSymbol::BarreEnd,
    ] {
        let json = serde_json::to_value(symbol).unwrap();
        assert_eq!(json, symbol.as_str());
    }
}
