//! Board domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by board business logic.
//! - Keep drag payloads explicitly typed before they reach the store.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Every task belongs to exactly one board at a time.

pub mod board;
pub mod move_request;
pub mod task;
