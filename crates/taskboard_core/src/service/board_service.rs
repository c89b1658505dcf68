//! Board use-case service.
//!
//! # Responsibility
//! - Provide the form-submission and drag-release entry points.
//! - Normalize caller input before it reaches the store.
//!
//! # Invariants
//! - Blank task text never reaches the store.
//! - Service APIs never bypass store mutation contracts.

use crate::model::board::BoardSnapshot;
use crate::model::move_request::MoveRequest;
use crate::model::task::TaskId;
use crate::store::board_store::{MoveOutcome, StoreError};
use crate::store::BoardStateStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Errors from board service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardServiceError {
    /// Submitted text is blank after trim.
    EmptyTaskText,
    /// Store-level failure.
    Store(StoreError),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTaskText => write!(f, "task text must not be blank"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::EmptyTaskText => None,
        }
    }
}

impl From<StoreError> for BoardServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case wrapper around a board store.
pub struct BoardService<S: BoardStateStore> {
    store: S,
}

impl<S: BoardStateStore> BoardService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current snapshot for rendering.
    pub fn snapshot(&self) -> Arc<BoardSnapshot> {
        self.store.snapshot()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Adds a task from the board's input form.
    ///
    /// # Contract
    /// - Text is trimmed; blank text returns `EmptyTaskText`.
    /// - New task lands at index 0 of `board_id`.
    pub fn submit_task(
        &mut self,
        board_id: &str,
        raw_text: &str,
    ) -> Result<TaskId, BoardServiceError> {
        let text = normalize_task_text(raw_text)?;
        let id = self.store.append_task(board_id, text).map_err(|err| {
            warn!("event=task_submit module=board status=error board={board_id} error={err}");
            BoardServiceError::from(err)
        })?;
        info!("event=task_submit module=board status=ok board={board_id} task_id={id}");
        Ok(id)
    }

    /// Applies a drag release.
    ///
    /// # Contract
    /// - Missing destination returns `Ok(MoveOutcome::Cancelled)` silently.
    /// - Out-of-range indices and unknown boards return `Store` errors.
    pub fn drop_task(&mut self, request: &MoveRequest) -> Result<MoveOutcome, BoardServiceError> {
        match self.store.move_task(request) {
            Ok(outcome) => {
                if outcome == MoveOutcome::Moved {
                    info!(
                        "event=task_drop module=board status=ok source={} destination={}",
                        request.source_board_id,
                        request.destination_board_id.as_deref().unwrap_or("-")
                    );
                }
                Ok(outcome)
            }
            Err(err) => {
                warn!("event=task_drop module=board status=error error={err}");
                Err(err.into())
            }
        }
    }
}

fn normalize_task_text(value: &str) -> Result<String, BoardServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BoardServiceError::EmptyTaskText);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::normalize_task_text;
    use super::BoardServiceError;

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize_task_text("  buy milk \n").unwrap(), "buy milk");
    }

    #[test]
    fn normalize_rejects_whitespace_only() {
        assert_eq!(
            normalize_task_text(" \t ").unwrap_err(),
            BoardServiceError::EmptyTaskText
        );
    }
}
