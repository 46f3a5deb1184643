//! Note position repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the position-keyed mapping of placed notes for one diagram.
//! - Commit staged change batches as a single replacement of the mapping.
//!
//! # Invariants
//! - At most one note per `GridPos`; a later `Set` overwrites.
//! - A batch is applied entirely or not at all; readers never observe a
//!   half-applied batch.
//! - The map key always equals the stored note's `position`.

use crate::model::grid::GridPos;
use crate::model::note::Note;
use std::collections::BTreeMap;

/// One staged mutation of the note mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteChange {
    Set(Note),
    Unset(GridPos),
}

impl NoteChange {
    pub fn position(&self) -> GridPos {
        match self {
            Self::Set(note) => note.position,
            Self::Unset(pos) => *pos,
        }
    }
}

/// Ordered list of changes committed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBatch {
    changes: Vec<NoteChange>,
}

impl NoteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, note: Note) {
        self.changes.push(NoteChange::Set(note));
    }

    pub fn unset(&mut self, pos: GridPos) {
        self.changes.push(NoteChange::Unset(pos));
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn changes(&self) -> &[NoteChange] {
        &self.changes
    }
}

/// Repository interface for note position state.
pub trait NoteRepository {
    /// Returns whether a note occupies `pos`.
    fn has_note_at(&self, pos: GridPos) -> bool;
    /// Returns the note at `pos`, if any.
    fn get_note_at(&self, pos: GridPos) -> Option<Note>;
    /// Returns every stored note.
    fn list_notes(&self) -> Vec<Note>;
    /// Applies all changes in order as one replacement of the mapping.
    fn commit(&mut self, batch: NoteBatch);
}

/// In-memory note repository backed by an ordered map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteRepository {
    notes: BTreeMap<GridPos, Note>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn has_note_at(&self, pos: GridPos) -> bool {
        self.notes.contains_key(&pos)
    }

    fn get_note_at(&self, pos: GridPos) -> Option<Note> {
        self.notes.get(&pos).cloned()
    }

    fn list_notes(&self) -> Vec<Note> {
        self.notes.values().cloned().collect()
    }

    fn commit(&mut self, batch: NoteBatch) {
        if batch.is_empty() {
            return;
        }

        let mut next = self.notes.clone();
        for change in batch.changes {
            match change {
                NoteChange::Set(note) => {
                    next.insert(note.position, note);
                }
                NoteChange::Unset(pos) => {
                    next.remove(&pos);
                }
            }
        }
        self.notes = next;
    }
}
