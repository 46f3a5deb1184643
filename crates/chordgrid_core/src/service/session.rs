//! Chord editing session.
//!
//! # Responsibility
//! - Own diagram settings, the selected placement tool and the note store
//!   for one editing session.
//! - Route a click on a cell to single-note or barre placement.
//!
//! # Invariants
//! - The session is built only from a validated `DiagramConfig`.
//! - The note store starts empty and lives as long as the session.

use crate::grid::fretboard::FretboardGrid;
use crate::model::config::{ConfigError, DiagramConfig};
use crate::model::note::{BarreStyle, Note, NoteStyle, NoteSymbol};
use crate::repo::note_repo::InMemoryNoteRepository;
use crate::service::note_service::{NoteService, NoteServiceError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Span of a barre placed by a single click.
pub const DEFAULT_BARRE_SPAN: u32 = 2;

/// Placement tool selected in the controls menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Fret-dependent default marker.
    #[default]
    Default,
    /// Single-cell symbol; chain tags are rejected on use.
    Symbol(NoteSymbol),
    Barre(BarreStyle),
}

/// Errors from session-level operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Config(ConfigError),
    Notes(NoteServiceError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid diagram config: {err}"),
            Self::Notes(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Notes(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<NoteServiceError> for SessionError {
    fn from(value: NoteServiceError) -> Self {
        Self::Notes(value)
    }
}

pub type ChordNotes = NoteService<InMemoryNoteRepository, FretboardGrid>;

/// State of one chord diagram being edited.
#[derive(Debug)]
pub struct ChordSession {
    config: DiagramConfig,
    selected_tool: Tool,
    notes: ChordNotes,
}

impl ChordSession {
    /// Creates an empty session for `config`.
    ///
    /// # Errors
    /// - Returns `SessionError::Config` when `config` fails validation.
    pub fn new(config: DiagramConfig) -> Result<Self, SessionError> {
        let grid = FretboardGrid::from_config(&config)?;
        info!(
            "event=session_start module=session status=ok strings={} frets={}",
            config.strings_count, config.frets_count
        );
        Ok(Self {
            config,
            selected_tool: Tool::default(),
            notes: NoteService::new(InMemoryNoteRepository::new(), grid),
        })
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn selected_tool(&self) -> Tool {
        self.selected_tool
    }

    pub fn set_selected_tool(&mut self, tool: Tool) {
        self.selected_tool = tool;
    }

    pub fn notes(&self) -> &ChordNotes {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut ChordNotes {
        &mut self.notes
    }

    /// Applies the selected tool at one cell.
    ///
    /// `Tool::Barre` places a two-string barre through the barre path so
    /// existing chains are reconciled. Other tools place a single note and
    /// remove any chain the cell belonged to in the same commit.
    /// Returns the written note (the chain start for barres).
    pub fn apply_tool_at(&mut self, fret: u32, string: u32) -> Result<Note, SessionError> {
        let note = match self.selected_tool {
            Tool::Barre(style) => {
                self.notes.place_barre_with_style(fret, string, DEFAULT_BARRE_SPAN, style)?
            }
            Tool::Default => self.notes.replace_note(fret, string, NoteStyle::Default)?,
            Tool::Symbol(symbol) => self.notes.replace_note(fret, string, symbol)?,
        };
        Ok(note)
    }
}
