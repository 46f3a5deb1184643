//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `chordgrid_core` linkage with a tiny deterministic run.
//! - Print the notes of a demo chord, one record per line.
//! - Write core placement events to rolling logs under the temp directory.

use chordgrid_core::{
    default_log_level, init_logging, ChordSession, DiagramConfig, SessionError, Tool,
};
use std::process::ExitCode;

const LOG_DIR_NAME: &str = "chordgrid-logs";

fn main() -> ExitCode {
    println!("chordgrid_core version={}", chordgrid_core::core_version());

    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    match log_dir.to_str() {
        Some(dir) => match init_logging(default_log_level(), dir) {
            Ok(()) => println!("log_dir={dir}"),
            Err(err) => eprintln!("logging disabled: {err}"),
        },
        None => eprintln!("logging disabled: temp dir is not valid UTF-8"),
    }

    let mut session = match ChordSession::new(DiagramConfig::default()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("failed to start session: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = place_demo_chord(&mut session) {
        eprintln!("failed to place demo chord: {err}");
        return ExitCode::FAILURE;
    }

    println!("chord={}", session.config().chord_label);
    for note in session.notes().list_notes() {
        println!(
            "pos={} symbol={} span={} area={}",
            note.position,
            note.symbol.as_str(),
            note.span,
            note.area
        );
    }
    ExitCode::SUCCESS
}

// Five strings barred at fret 1 plus one fretted note.
fn place_demo_chord(session: &mut ChordSession) -> Result<(), SessionError> {
    session.notes_mut().place_barre(1, 0, 5)?;
    session.set_selected_tool(Tool::Default);
    session.apply_tool_at(3, 2)?;
    Ok(())
}
