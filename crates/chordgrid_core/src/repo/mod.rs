//! Repository layer for note position state.
//!
//! # Responsibility
//! - Define the storage contract consumed by note services.
//! - Keep the mapping representation out of placement algorithms.
//!
//! # Invariants
//! - Repositories never interpret barre chains; reconciliation belongs to
//!   the service layer.

pub mod note_repo;
