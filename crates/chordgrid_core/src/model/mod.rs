//! Domain model for chord diagram editing.
//!
//! # Responsibility
//! - Define canonical grid keys, note records and diagram settings.
//! - Keep rendering concerns out of the stored shape.
//!
//! # Invariants
//! - Every stored note is identified by exactly one `GridPos`.
//! - A barre is stored as one note per covered string, never as one record.

pub mod config;
pub mod grid;
pub mod note;
