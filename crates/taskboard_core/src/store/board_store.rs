//! In-memory board state store.
//!
//! # Responsibility
//! - Own the current `BoardSnapshot` and replace it atomically on mutation.
//! - Assign task ids from a monotonic counter.
//! - Notify subscribers with every newly committed snapshot.
//!
//! # Invariants
//! - Rejected or cancelled mutations leave the current `Arc` untouched and
//!   emit nothing.
//! - Task ids handed out by one store never repeat.

use crate::model::board::{BoardId, BoardSnapshot, SnapshotError};
use crate::model::move_request::MoveRequest;
use crate::model::task::{Task, TaskId};
use crate::store::reorder;
use crate::store::BoardStateStore;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Board key is not part of the fixed collection.
    UnknownBoard(BoardId),
    /// Drag source does not point at an existing task.
    SourceIndexOutOfRange {
        board_id: BoardId,
        index: usize,
        len: usize,
    },
    /// Drop position is past the end of the destination list.
    DestinationIndexOutOfRange {
        board_id: BoardId,
        index: usize,
        len: usize,
    },
    /// Every id up to `u64::MAX` has been handed out.
    TaskIdsExhausted,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBoard(id) => write!(f, "board not found: {id}"),
            Self::SourceIndexOutOfRange {
                board_id,
                index,
                len,
            } => write!(
                f,
                "source index {index} out of range for board {board_id} with {len} task(s)"
            ),
            Self::DestinationIndexOutOfRange {
                board_id,
                index,
                len,
            } => write!(
                f,
                "destination index {index} out of range for board {board_id} with {len} task(s)"
            ),
            Self::TaskIdsExhausted => write!(f, "no task ids left to assign"),
        }
    }
}

impl Error for StoreError {}

/// Result of applying a drag release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// State was replaced and subscribers were notified.
    Moved,
    /// Drop had no destination; state is unchanged.
    Cancelled,
}

/// Handle returned by [`BoardStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Arc<BoardSnapshot>)>;

/// Single source of truth for board state.
pub struct BoardStore {
    current: Arc<BoardSnapshot>,
    /// `None` once the id space is used up.
    next_task_id: Option<u64>,
    next_subscription_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl BoardStore {
    /// Creates a store seeded with `initial`.
    ///
    /// The id counter starts past the largest id already present. A seed
    /// holding `u64::MAX` leaves no ids; appends then fail with
    /// `TaskIdsExhausted`.
    pub fn new(initial: BoardSnapshot) -> Self {
        let next_task_id = match initial.max_task_id() {
            Some(id) => id.get().checked_add(1),
            None => Some(1),
        };
        Self {
            current: Arc::new(initial),
            next_task_id,
            next_subscription_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Creates a store with empty boards in the given display order.
    pub fn with_board_ids<I, S>(board_ids: I) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<BoardId>,
    {
        Ok(Self::new(BoardSnapshot::with_board_ids(board_ids)?))
    }

    /// Registers a listener called with each committed snapshot.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<BoardSnapshot>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when the id is not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn commit(&mut self, next: BoardSnapshot) {
        self.current = Arc::new(next);
        for (_, listener) in &self.listeners {
            listener(&self.current);
        }
    }
}

impl BoardStateStore for BoardStore {
    fn snapshot(&self) -> Arc<BoardSnapshot> {
        Arc::clone(&self.current)
    }

    fn append_task(&mut self, board_id: &str, text: String) -> StoreResult<TaskId> {
        let raw_id = self.next_task_id.ok_or(StoreError::TaskIdsExhausted)?;
        let id = TaskId::new(raw_id);
        let next = reorder::prepend_task(&self.current, board_id, Task::new(id, text))?;
        self.next_task_id = raw_id.checked_add(1);
        self.commit(next);
        debug!(
            "event=task_appended module=store status=ok board={} task_id={} total={}",
            board_id,
            id,
            self.current.task_count()
        );
        Ok(id)
    }

    fn move_task(&mut self, request: &MoveRequest) -> StoreResult<MoveOutcome> {
        let Some(resolved) = request.resolve() else {
            debug!(
                "event=task_move module=store status=cancelled board={} index={}",
                request.source_board_id, request.source_index
            );
            return Ok(MoveOutcome::Cancelled);
        };

        let next = reorder::move_task(&self.current, &resolved)?;
        self.commit(next);
        debug!(
            "event=task_move module=store status=ok from={}:{} to={}:{}",
            resolved.source_board_id,
            resolved.source_index,
            resolved.destination_board_id,
            resolved.destination_index
        );
        Ok(MoveOutcome::Moved)
    }
}
