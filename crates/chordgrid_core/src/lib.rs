//! Core engine for editing guitar chord diagrams.
//! Owns note placement and barre chain reconciliation on a fretboard grid.

pub mod grid;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use grid::fretboard::FretboardGrid;
pub use grid::{Direction, GridError, GridOracle, GridResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::config::{ConfigError, DiagramConfig};
pub use model::grid::{GridArea, GridPlacement, GridPos};
pub use model::note::{BarreStyle, Note, NoteStyle, NoteSymbol};
pub use repo::note_repo::{InMemoryNoteRepository, NoteBatch, NoteChange, NoteRepository};
pub use service::note_service::{NoteService, NoteServiceError, NoteServiceResult};
pub use service::session::{ChordNotes, ChordSession, SessionError, Tool, DEFAULT_BARRE_SPAN};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
