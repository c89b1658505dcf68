//! Task domain model.
//!
//! # Responsibility
//! - Define the unit of work rendered as one card on a board.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused for another task.
//! - Only `text` is user-visible content; identity never changes on move.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable task identifier.
///
/// Assigned by the owning store from a monotonic counter, so two tasks
/// created within the same clock tick still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One card on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identity, unique across the whole board collection.
    pub id: TaskId,
    /// Display text as submitted by the form layer.
    pub text: String,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskId};

    #[test]
    fn task_id_serializes_as_plain_number() {
        let task = Task::new(TaskId::new(42), "write docs");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["text"], "write docs");
    }

    #[test]
    fn task_ids_order_by_creation_counter() {
        assert!(TaskId::new(1) < TaskId::new(2));
        assert_eq!(TaskId::new(7).to_string(), "7");
    }
}
