//! Board state store and snapshot transitions.
//!
//! # Responsibility
//! - Define the store contract used by the service layer.
//! - Keep the reorder algorithm free of store bookkeeping.
//!
//! # Invariants
//! - Store writes go through `append_task` / `move_task` only.
//! - Readers receive immutable snapshots; no caller mutates shared state.

pub mod board_store;
pub mod reorder;

use crate::model::board::BoardSnapshot;
use crate::model::move_request::MoveRequest;
use crate::model::task::TaskId;
use board_store::{MoveOutcome, StoreResult};
use std::sync::Arc;

/// Store interface for board mutations.
pub trait BoardStateStore {
    /// Returns the current immutable snapshot.
    fn snapshot(&self) -> Arc<BoardSnapshot>;
    /// Creates a task at the head of `board_id`.
    fn append_task(&mut self, board_id: &str, text: String) -> StoreResult<TaskId>;
    /// Applies one drag release; cancelled drops are `Ok(Cancelled)`.
    fn move_task(&mut self, request: &MoveRequest) -> StoreResult<MoveOutcome>;
}
