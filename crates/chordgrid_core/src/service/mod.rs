//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and grid oracle calls into editing operations.
//! - Keep UI layers decoupled from chain bookkeeping.

pub mod note_service;
pub mod session;
