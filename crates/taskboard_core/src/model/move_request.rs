//! Typed drag-and-drop payload.
//!
//! # Responsibility
//! - Carry the result of a drag gesture from the gesture layer to the store.
//! - Resolve optional drop fields into a concrete move, or into a cancel.
//!
//! # Invariants
//! - A request without a destination board or index never mutates state.

use crate::model::board::BoardId;
use serde::{Deserialize, Serialize};

/// Raw drag release as produced by the gesture layer.
///
/// `destination_board_id` and `destination_index` are `None` when the
/// pointer was released outside any drop target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source_board_id: BoardId,
    pub source_index: usize,
    pub destination_board_id: Option<BoardId>,
    pub destination_index: Option<usize>,
}

/// A move whose destination is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMove {
    pub source_board_id: BoardId,
    pub source_index: usize,
    pub destination_board_id: BoardId,
    pub destination_index: usize,
}

impl ResolvedMove {
    pub fn is_same_board(&self) -> bool {
        self.source_board_id == self.destination_board_id
    }
}

impl MoveRequest {
    /// Starts a request for a drag that began at `source_index`.
    pub fn from_source(source_board_id: impl Into<BoardId>, source_index: usize) -> Self {
        Self {
            source_board_id: source_board_id.into(),
            source_index,
            destination_board_id: None,
            destination_index: None,
        }
    }

    /// Sets the drop target.
    pub fn to(mut self, destination_board_id: impl Into<BoardId>, destination_index: usize) -> Self {
        self.destination_board_id = Some(destination_board_id.into());
        self.destination_index = Some(destination_index);
        self
    }

    /// Shorthand for a full four-field request.
    pub fn between(
        source_board_id: impl Into<BoardId>,
        source_index: usize,
        destination_board_id: impl Into<BoardId>,
        destination_index: usize,
    ) -> Self {
        Self::from_source(source_board_id, source_index).to(destination_board_id, destination_index)
    }

    /// Returns the concrete move, or `None` when the drop was cancelled.
    pub fn resolve(&self) -> Option<ResolvedMove> {
        let destination_index = self.destination_index?;
        let destination_board_id = self.destination_board_id.clone()?;
        Some(ResolvedMove {
            source_board_id: self.source_board_id.clone(),
            source_index: self.source_index,
            destination_board_id,
            destination_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::MoveRequest;

    #[test]
    fn request_without_destination_resolves_to_none() {
        assert!(MoveRequest::from_source("todo", 0).resolve().is_none());
    }

    #[test]
    fn request_with_board_but_no_index_is_cancelled() {
        let mut request = MoveRequest::from_source("todo", 0);
        request.destination_board_id = Some("done".to_string());
        assert!(request.resolve().is_none());
    }

    #[test]
    fn full_request_resolves() {
        let resolved = MoveRequest::between("todo", 1, "done", 0).resolve().unwrap();
        assert_eq!(resolved.source_board_id, "todo");
        assert_eq!(resolved.source_index, 1);
        assert_eq!(resolved.destination_board_id, "done");
        assert_eq!(resolved.destination_index, 0);
        assert!(!resolved.is_same_board());
    }

    #[test]
    fn request_decodes_from_gesture_json() {
        let value = serde_json::json!({
            "source_board_id": "doing",
            "source_index": 2,
            "destination_board_id": null,
            "destination_index": null
        });
        let request: MoveRequest = serde_json::from_value(value).unwrap();
        assert!(request.resolve().is_none());
    }
}
