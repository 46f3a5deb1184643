//! Note record and symbol model.
//!
//! # Responsibility
//! - Define the record stored per occupied grid cell.
//! - Define the closed symbol set, including barre chain tags.
//!
//! # Invariants
//! - `BarreStart.span` is the full chain length.
//! - Every other chain node carries the remaining length from itself to the
//!   chain end inclusive, so `BarreEnd.span == 1`.
//! - Non-barre symbols carry `span == 1`.
//! - All nodes of one chain share the same `outline` flag.

use crate::model::grid::{GridArea, GridPos};
use serde::{Deserialize, Serialize};

/// Marker drawn at one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteSymbol {
    Blank,
    /// Outlined ring, the default for open strings.
    Circle,
    /// Filled dot, the default for fretted notes.
    Ball,
    Square,
    Diamond,
    Triangle,
    Cross,
    CircleOutline,
    SquareOutline,
    DiamondOutline,
    TriangleOutline,
    CrossOutline,
    /// First node of a barre chain; owns the full span.
    BarreStart,
    /// Interior node of a barre chain.
    BarreDummy,
    /// Last node of a barre chain.
    BarreEnd,
}

impl NoteSymbol {
    /// Stable wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "BLANK",
            Self::Circle => "CIRCLE",
            Self::Ball => "BALL",
            Self::Square => "SQUARE",
            Self::Diamond => "DIAMOND",
            Self::Triangle => "TRIANGLE",
            Self::Cross => "CROSS",
            Self::CircleOutline => "CIRCLE_OUTLINE",
            Self::SquareOutline => "SQUARE_OUTLINE",
            Self::DiamondOutline => "DIAMOND_OUTLINE",
            Self::TriangleOutline => "TRIANGLE_OUTLINE",
            Self::CrossOutline => "CROSS_OUTLINE",
            Self::BarreStart => "BARRE_START",
            Self::BarreDummy => "BARRE_DUMMY",
            Self::BarreEnd => "BARRE_END",
        }
    }

    /// Returns whether this symbol belongs to a barre chain.
    pub fn is_barre_node(self) -> bool {
        matches!(self, Self::BarreStart | Self::BarreDummy | Self::BarreEnd)
    }

    /// Returns whether this symbol is a chain node other than the start.
    pub fn is_barre_continuation(self) -> bool {
        matches!(self, Self::BarreDummy | Self::BarreEnd)
    }
}

/// Style requested by a caller before default resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteStyle {
    /// Resolves to `Circle` on the open string row and `Ball` elsewhere.
    #[default]
    Default,
    Symbol(NoteSymbol),
}

impl NoteStyle {
    /// Resolves the `Default` sentinel against the target fret.
    pub fn resolve(self, fret: u32) -> NoteSymbol {
        match self {
            Self::Default if fret == 0 => NoteSymbol::Circle,
            Self::Default => NoteSymbol::Ball,
            Self::Symbol(symbol) => symbol,
        }
    }
}

impl From<NoteSymbol> for NoteStyle {
    fn from(value: NoteSymbol) -> Self {
        Self::Symbol(value)
    }
}

/// Fill of a barre chain; single-cell symbols encode outline in the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarreStyle {
    #[default]
    Filled,
    Outline,
}

impl BarreStyle {
    pub fn is_outline(self) -> bool {
        self == Self::Outline
    }
}

/// Record stored for one occupied cell.
///
/// `position` duplicates the map key so a record is self-describing when
/// handed to rendering layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub position: GridPos,
    /// Layout metadata from the grid oracle.
    pub area: GridArea,
    pub fret: u32,
    pub string: u32,
    pub symbol: NoteSymbol,
    /// Full length on a barre start, remaining length on other chain nodes.
    pub span: u32,
    /// Hollow barre chain. Every node of a chain carries the same value;
    /// always `false` outside chains.
    #[serde(default)]
    pub outline: bool,
}

impl Note {
    /// Returns whether this note is part of a barre chain.
    pub fn is_barre_node(&self) -> bool {
        self.symbol.is_barre_node()
    }

    /// Returns the string index of the chain end as seen from this node.
    ///
    /// Holds for starts and continuations alike because both spans count
    /// through to the end node.
    pub fn last_covered_string(&self) -> u32 {
        self.string + self.span.saturating_sub(1)
    }
}
