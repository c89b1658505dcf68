//! Board and board-collection domain model.
//!
//! # Responsibility
//! - Define the ordered column (`Board`) and the fixed collection of
//!   columns (`BoardSnapshot`) that the store publishes.
//! - Keep snapshots immutable so observers can hold them freely.
//!
//! # Invariants
//! - Board ids are unique; their order is left-to-right display order.
//! - Task ids are unique across the whole collection.
//! - A snapshot never changes after construction. Updates build a new
//!   snapshot that reuses the `Arc` of every untouched board.

use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Caller-supplied board key, e.g. `todo`, `doing`, `done`.
pub type BoardId = String;

/// Errors raised while assembling a board collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Board id is blank after trim.
    BlankBoardId,
    /// The same board id was declared twice.
    DuplicateBoard(BoardId),
    /// The same task id appears in two positions.
    DuplicateTaskId(TaskId),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankBoardId => write!(f, "board id must not be blank"),
            Self::DuplicateBoard(id) => write!(f, "board declared more than once: {id}"),
            Self::DuplicateTaskId(id) => write!(f, "task id appears more than once: {id}"),
        }
    }
}

impl Error for SnapshotError {}

/// One named, ordered column of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Stable board key.
    pub id: BoardId,
    /// Display-ordered tasks. Shared between snapshots until replaced.
    pub tasks: Arc<Vec<Task>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self::with_tasks(id, Vec::new())
    }

    pub fn with_tasks(id: impl Into<BoardId>, tasks: Vec<Task>) -> Self {
        Self {
            id: id.into(),
            tasks: Arc::new(tasks),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Immutable board collection published by the store.
///
/// Serialized as a plain array of boards so key order survives JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct BoardSnapshot {
    boards: Vec<Board>,
}

impl BoardSnapshot {
    /// Creates a collection of empty boards in the given display order.
    pub fn with_board_ids<I, S>(board_ids: I) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<BoardId>,
    {
        Self::from_boards(board_ids.into_iter().map(Board::new).collect())
    }

    /// Creates a collection from pre-populated boards.
    ///
    /// # Errors
    /// - `BlankBoardId` / `DuplicateBoard` when board keys are invalid.
    /// - `DuplicateTaskId` when one task id is present twice.
    pub fn from_boards(boards: Vec<Board>) -> Result<Self, SnapshotError> {
        let mut board_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        for board in &boards {
            if board.id.trim().is_empty() {
                return Err(SnapshotError::BlankBoardId);
            }
            if !board_ids.insert(board.id.as_str()) {
                return Err(SnapshotError::DuplicateBoard(board.id.clone()));
            }
            for task in board.tasks.iter() {
                if !task_ids.insert(task.id) {
                    return Err(SnapshotError::DuplicateTaskId(task.id));
                }
            }
        }
        Ok(Self { boards })
    }

    /// Boards in display order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, board_id: &str) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == board_id)
    }

    /// Tasks of one board, or `None` for an undeclared key.
    pub fn tasks(&self, board_id: &str) -> Option<&Arc<Vec<Task>>> {
        self.board(board_id).map(|board| &board.tasks)
    }

    pub fn board_ids(&self) -> impl Iterator<Item = &str> {
        self.boards.iter().map(|board| board.id.as_str())
    }

    /// Total number of tasks across all boards.
    pub fn task_count(&self) -> usize {
        self.boards.iter().map(Board::len).sum()
    }

    /// Largest task id currently present.
    pub fn max_task_id(&self) -> Option<TaskId> {
        self.boards
            .iter()
            .flat_map(|board| board.tasks.iter().map(|task| task.id))
            .max()
    }

    pub(crate) fn position(&self, board_id: &str) -> Option<usize> {
        self.boards.iter().position(|board| board.id == board_id)
    }

    /// Builds the next snapshot with some task lists swapped out.
    ///
    /// Boards not named in `replacements` keep their existing `Arc`.
    pub(crate) fn with_replaced_tasks(&self, replacements: Vec<(usize, Vec<Task>)>) -> Self {
        let mut boards = self.boards.clone();
        for (position, tasks) in replacements {
            boards[position].tasks = Arc::new(tasks);
        }
        Self { boards }
    }
}

impl TryFrom<Vec<Board>> for BoardSnapshot {
    type Error = SnapshotError;

    fn try_from(value: Vec<Board>) -> Result<Self, Self::Error> {
        Self::from_boards(value)
    }
}

impl From<BoardSnapshot> for Vec<Board> {
    fn from(value: BoardSnapshot) -> Self {
        value.boards
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, BoardSnapshot, SnapshotError};
    use crate::model::task::{Task, TaskId};
    use std::sync::Arc;

    #[test]
    fn with_board_ids_keeps_declaration_order() {
        let snapshot = BoardSnapshot::with_board_ids(["todo", "doing", "done"]).unwrap();
        let ids: Vec<&str> = snapshot.board_ids().collect();
        assert_eq!(ids, vec!["todo", "doing", "done"]);
        assert_eq!(snapshot.task_count(), 0);
        assert_eq!(snapshot.max_task_id(), None);
    }

    #[test]
    fn duplicate_board_is_rejected() {
        let err = BoardSnapshot::with_board_ids(["todo", "todo"]).unwrap_err();
        assert_eq!(err, SnapshotError::DuplicateBoard("todo".to_string()));
    }

    #[test]
    fn blank_board_is_rejected() {
        let err = BoardSnapshot::with_board_ids(["todo", "  "]).unwrap_err();
        assert_eq!(err, SnapshotError::BlankBoardId);
    }

    #[test]
    fn duplicate_task_id_across_boards_is_rejected() {
        let err = BoardSnapshot::from_boards(vec![
            Board::with_tasks("a", vec![Task::new(TaskId::new(1), "one")]),
            Board::with_tasks("b", vec![Task::new(TaskId::new(1), "again")]),
        ])
        .unwrap_err();
        assert_eq!(err, SnapshotError::DuplicateTaskId(TaskId::new(1)));
    }

    #[test]
    fn replaced_tasks_share_untouched_boards() {
        let snapshot = BoardSnapshot::from_boards(vec![
            Board::with_tasks("a", vec![Task::new(TaskId::new(1), "one")]),
            Board::new("b"),
        ])
        .unwrap();

        let next = snapshot.with_replaced_tasks(vec![(1, vec![Task::new(TaskId::new(2), "two")])]);
        assert!(Arc::ptr_eq(
            snapshot.tasks("a").unwrap(),
            next.tasks("a").unwrap()
        ));
        assert!(snapshot.tasks("b").unwrap().is_empty());
        assert_eq!(next.tasks("b").unwrap().len(), 1);
    }

    #[test]
    fn json_round_trip_keeps_board_and_task_order() {
        let snapshot = BoardSnapshot::from_boards(vec![
            Board::with_tasks(
                "zeta",
                vec![
                    Task::new(TaskId::new(3), "third"),
                    Task::new(TaskId::new(1), "first"),
                ],
            ),
            Board::new("alpha"),
            Board::with_tasks("mid", vec![Task::new(TaskId::new(2), "second")]),
        ])
        .unwrap();

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, snapshot);
        let board_ids: Vec<&str> = restored.board_ids().collect();
        assert_eq!(board_ids, vec!["zeta", "alpha", "mid"]);
        let zeta: Vec<u64> = restored
            .tasks("zeta")
            .unwrap()
            .iter()
            .map(|task| task.id.get())
            .collect();
        assert_eq!(zeta, vec![3, 1]);
    }

    #[test]
    fn deserialize_validates_board_keys() {
        let value = serde_json::json!([
            { "id": "todo", "tasks": [] },
            { "id": "todo", "tasks": [] }
        ]);
        let err = serde_json::from_value::<BoardSnapshot>(value).unwrap_err();
        assert!(err.to_string().contains("board declared more than once"));
    }
}
