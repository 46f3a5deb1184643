//! Chord diagram configuration.
//!
//! # Responsibility
//! - Describe fretboard dimensions and display defaults for one session.
//! - Validate dimensions before any grid is built from them.
//!
//! # Invariants
//! - `strings_count >= 1` and `frets_count >= 1`.
//! - `tuning.len() == strings_count` and no tuning name is blank.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_STRINGS_COUNT: u32 = 6;
const DEFAULT_FRETS_COUNT: u32 = 5;
const DEFAULT_CHORD_LABEL: &str = "Cmaj7";
const DEFAULT_TUNING: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

/// Diagram settings owned by one editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramConfig {
    pub strings_count: u32,
    /// Fretted rows below the nut; the open row is not counted.
    pub frets_count: u32,
    pub chord_label: String,
    /// One note name per string, low to high.
    pub tuning: Vec<String>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            strings_count: DEFAULT_STRINGS_COUNT,
            frets_count: DEFAULT_FRETS_COUNT,
            chord_label: DEFAULT_CHORD_LABEL.to_string(),
            tuning: DEFAULT_TUNING.iter().map(|name| (*name).to_string()).collect(),
        }
    }
}

/// Validation errors for `DiagramConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoStrings,
    NoFrets,
    TuningMismatch { strings_count: u32, tuning_len: usize },
    BlankTuning { string: usize },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoStrings => write!(f, "strings_count must be at least 1"),
            Self::NoFrets => write!(f, "frets_count must be at least 1"),
            Self::TuningMismatch {
                strings_count,
                tuning_len,
            } => write!(
                f,
                "tuning has {tuning_len} entries but strings_count is {strings_count}"
            ),
            Self::BlankTuning { string } => {
                write!(f, "tuning name for string {string} must not be blank")
            }
        }
    }
}

impl Error for ConfigError {}

impl DiagramConfig {
    /// Checks dimension and tuning invariants.
    ///
    /// # Errors
    /// - Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strings_count == 0 {
            return Err(ConfigError::NoStrings);
        }
        if self.frets_count == 0 {
            return Err(ConfigError::NoFrets);
        }
        if self.tuning.len() != self.strings_count as usize {
            return Err(ConfigError::TuningMismatch {
                strings_count: self.strings_count,
                tuning_len: self.tuning.len(),
            });
        }
        if let Some(string) = self.tuning.iter().position(|name| name.trim().is_empty()) {
            return Err(ConfigError::BlankTuning { string });
        }
        Ok(())
    }
}
