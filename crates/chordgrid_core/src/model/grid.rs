//! Grid coordinate types shared by the oracle and the note store.
//!
//! # Responsibility
//! - Define the canonical position key for one fret/string cell.
//! - Define the layout rectangle handed to rendering layers.
//!
//! # Invariants
//! - Two `GridPos` values are equal iff they denote the same cell.
//! - `GridPos` ordering is fret-major, then string.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Canonical key for one fret/string cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Fret index, `0` is the open string row above the nut.
    pub fret: u32,
    /// String index, `0` is the leftmost string column.
    pub string: u32,
}

impl GridPos {
    pub fn new(fret: u32, string: u32) -> Self {
        Self { fret, string }
    }
}

impl Display for GridPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "f{}s{}", self.fret, self.string)
    }
}

/// CSS-grid style placement rectangle.
///
/// Lines are 1-based and end-exclusive, matching `grid-area` shorthand.
/// The engine never reads this; it only carries it alongside each note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridArea {
    pub row_start: u32,
    pub column_start: u32,
    pub row_end: u32,
    pub column_end: u32,
}

impl Display for GridArea {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.row_start, self.column_start, self.row_end, self.column_end
        )
    }
}

/// Resolved placement of one coordinate: storable key plus layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    pub pos: GridPos,
    pub area: GridArea,
}
