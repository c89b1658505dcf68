//! Pure snapshot transitions for append and move.
//!
//! # Invariants
//! - Inputs are never mutated; every transition returns a new snapshot.
//! - Moves use remove-then-insert: the destination index is counted in the
//!   list after the source task has been taken out.
//! - Total task count is preserved by every move.

use crate::model::board::BoardSnapshot;
use crate::model::move_request::ResolvedMove;
use crate::model::task::Task;
use crate::store::board_store::{StoreError, StoreResult};

/// Inserts `task` at the head of `board_id`.
pub fn prepend_task(
    snapshot: &BoardSnapshot,
    board_id: &str,
    task: Task,
) -> StoreResult<BoardSnapshot> {
    let position = snapshot
        .position(board_id)
        .ok_or_else(|| StoreError::UnknownBoard(board_id.to_string()))?;

    let current = &snapshot.boards()[position].tasks;
    let mut tasks = Vec::with_capacity(current.len() + 1);
    tasks.push(task);
    tasks.extend(current.iter().cloned());

    Ok(snapshot.with_replaced_tasks(vec![(position, tasks)]))
}

/// Relocates one task within a board or across boards.
///
/// # Errors
/// - `UnknownBoard` when either board key is undeclared.
/// - `SourceIndexOutOfRange` when `source_index >= len`.
/// - `DestinationIndexOutOfRange` when `destination_index` exceeds the
///   destination length after removal.
pub fn move_task(snapshot: &BoardSnapshot, request: &ResolvedMove) -> StoreResult<BoardSnapshot> {
    let source_position = snapshot
        .position(&request.source_board_id)
        .ok_or_else(|| StoreError::UnknownBoard(request.source_board_id.clone()))?;
    let destination_position = snapshot
        .position(&request.destination_board_id)
        .ok_or_else(|| StoreError::UnknownBoard(request.destination_board_id.clone()))?;

    let source_tasks = &snapshot.boards()[source_position].tasks;
    if request.source_index >= source_tasks.len() {
        return Err(StoreError::SourceIndexOutOfRange {
            board_id: request.source_board_id.clone(),
            index: request.source_index,
            len: source_tasks.len(),
        });
    }

    let mut source_list = source_tasks.as_ref().clone();
    let moved = source_list.remove(request.source_index);

    if request.is_same_board() {
        ensure_insert_position(request, source_list.len())?;
        source_list.insert(request.destination_index, moved);
        return Ok(snapshot.with_replaced_tasks(vec![(source_position, source_list)]));
    }

    let mut destination_list = snapshot.boards()[destination_position]
        .tasks
        .as_ref()
        .clone();
    ensure_insert_position(request, destination_list.len())?;
    destination_list.insert(request.destination_index, moved);

    Ok(snapshot.with_replaced_tasks(vec![
        (source_position, source_list),
        (destination_position, destination_list),
    ]))
}

fn ensure_insert_position(request: &ResolvedMove, len: usize) -> StoreResult<()> {
    if request.destination_index > len {
        return Err(StoreError::DestinationIndexOutOfRange {
            board_id: request.destination_board_id.clone(),
            index: request.destination_index,
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{move_task, prepend_task};
    use crate::model::board::{Board, BoardSnapshot};
    use crate::model::move_request::MoveRequest;
    use crate::model::task::{Task, TaskId};
    use crate::store::board_store::StoreError;

    fn task(id: u64) -> Task {
        Task::new(TaskId::new(id), format!("t{id}"))
    }

    fn ids(snapshot: &BoardSnapshot, board_id: &str) -> Vec<u64> {
        snapshot
            .tasks(board_id)
            .unwrap()
            .iter()
            .map(|task| task.id.get())
            .collect()
    }

    fn single(tasks: Vec<Task>) -> BoardSnapshot {
        BoardSnapshot::from_boards(vec![Board::with_tasks("a", tasks)]).unwrap()
    }

    #[test]
    fn prepend_places_task_at_head() {
        let snapshot = single(vec![task(1), task(2)]);
        let next = prepend_task(&snapshot, "a", task(3)).unwrap();
        assert_eq!(ids(&next, "a"), vec![3, 1, 2]);
        assert_eq!(ids(&snapshot, "a"), vec![1, 2]);
    }

    #[test]
    fn forward_move_to_last_index() {
        let snapshot = single(vec![task(1), task(2), task(3)]);
        let request = MoveRequest::between("a", 0, "a", 2).resolve().unwrap();
        let next = move_task(&snapshot, &request).unwrap();
        assert_eq!(ids(&next, "a"), vec![2, 3, 1]);
    }

    #[test]
    fn backward_move_to_first_index() {
        let snapshot = single(vec![task(1), task(2), task(3)]);
        let request = MoveRequest::between("a", 2, "a", 0).resolve().unwrap();
        let next = move_task(&snapshot, &request).unwrap();
        assert_eq!(ids(&next, "a"), vec![3, 1, 2]);
    }

    #[test]
    fn forward_move_lands_before_element_after_destination() {
        let snapshot = single(vec![task(1), task(2), task(3), task(4)]);
        let request = MoveRequest::between("a", 0, "a", 1).resolve().unwrap();
        let next = move_task(&snapshot, &request).unwrap();
        assert_eq!(ids(&next, "a"), vec![2, 1, 3, 4]);
    }

    #[test]
    fn same_board_rejects_index_past_shortened_length() {
        let snapshot = single(vec![task(1), task(2)]);
        let request = MoveRequest::between("a", 0, "a", 2).resolve().unwrap();
        let err = move_task(&snapshot, &request).unwrap_err();
        assert_eq!(
            err,
            StoreError::DestinationIndexOutOfRange {
                board_id: "a".to_string(),
                index: 2,
                len: 1,
            }
        );
    }

    #[test]
    fn source_index_equal_to_len_is_rejected() {
        let snapshot = single(vec![task(1)]);
        let request = MoveRequest::between("a", 1, "a", 0).resolve().unwrap();
        let err = move_task(&snapshot, &request).unwrap_err();
        assert!(matches!(err, StoreError::SourceIndexOutOfRange { len: 1, .. }));
    }

    #[test]
    fn unknown_destination_board_is_rejected() {
        let snapshot = single(vec![task(1)]);
        let request = MoveRequest::between("a", 0, "zzz", 0).resolve().unwrap();
        let err = move_task(&snapshot, &request).unwrap_err();
        assert_eq!(err, StoreError::UnknownBoard("zzz".to_string()));
    }
}
