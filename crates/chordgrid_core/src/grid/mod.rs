//! Position grid oracle contract and fretboard implementation.
//!
//! # Responsibility
//! - Translate fret/string coordinates into canonical `GridPos` keys.
//! - Walk neighbouring cells along the string axis.
//!
//! # Invariants
//! - Oracle calls are pure; they never touch note state.
//! - Coordinates outside the board are reported as `GridError`, never
//!   clamped silently.

pub mod fretboard;

use crate::model::grid::{GridPlacement, GridPos};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type GridResult<T> = Result<T, GridError>;

/// Direction of travel along the string axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Invalid coordinate or walk reported by a grid oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    StringOutOfRange { string: u32, strings_count: u32 },
    FretOutOfRange { fret: u32, frets_count: u32 },
    InvalidSpan { string: u32, span: u32 },
    StepOffBoard {
        from: GridPos,
        direction: Direction,
        count: u32,
    },
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StringOutOfRange {
                string,
                strings_count,
            } => write!(
                f,
                "string {string} is outside the fretboard (strings_count={strings_count})"
            ),
            Self::FretOutOfRange { fret, frets_count } => write!(
                f,
                "fret {fret} is outside the fretboard (frets_count={frets_count})"
            ),
            Self::InvalidSpan { string, span } => {
                write!(f, "span {span} from string {string} does not fit the fretboard")
            }
            Self::StepOffBoard {
                from,
                direction,
                count,
            } => write!(
                f,
                "moving {count} step(s) {} from {from} leaves the fretboard",
                direction.as_str()
            ),
        }
    }
}

impl Error for GridError {}

/// Geometry collaborator consulted by the note store.
pub trait GridOracle {
    /// Number of strings on the board.
    fn strings_count(&self) -> u32;

    /// Canonicalizes a coordinate, optionally widened to `span` strings.
    fn to_position(&self, fret: u32, string: u32, span: Option<u32>) -> GridResult<GridPlacement>;

    /// Returns the key reached by moving `count` string-steps from `pos`.
    fn step(&self, pos: GridPos, direction: Direction, count: u32) -> GridResult<GridPos>;

    /// Upper bound on a span that starts at `string`.
    fn max_span_from_string(&self, string: u32) -> u32;
}
