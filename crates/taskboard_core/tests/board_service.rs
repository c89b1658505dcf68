use std::sync::Arc;
use taskboard_core::{
    BoardColumns, BoardService, BoardServiceError, BoardSnapshot, BoardStateStore, BoardStore,
    MoveOutcome, MoveRequest, StoreError, StoreResult, TaskId,
};

/// Store double that records calls and never changes state.
#[derive(Default)]
struct RecordingStore {
    appended: Vec<(String, String)>,
    moves: usize,
}

impl BoardStateStore for RecordingStore {
    fn snapshot(&self) -> Arc<BoardSnapshot> {
        Arc::new(BoardSnapshot::default())
    }

    fn append_task(&mut self, board_id: &str, text: String) -> StoreResult<TaskId> {
        self.appended.push((board_id.to_string(), text));
        Ok(TaskId::new(self.appended.len() as u64))
    }

    fn move_task(&mut self, _request: &MoveRequest) -> StoreResult<MoveOutcome> {
        self.moves += 1;
        Ok(MoveOutcome::Moved)
    }
}

fn service() -> BoardService<BoardStore> {
    BoardService::new(BoardStore::with_board_ids(["todo", "doing", "done"]).unwrap())
}

#[test]
fn submit_trims_text_before_store() {
    let mut service = BoardService::new(RecordingStore::default());
    service.submit_task("todo", "  write docs \n").unwrap();
    assert_eq!(
        service.store().appended,
        vec![("todo".to_string(), "write docs".to_string())]
    );
}

#[test]
fn blank_submission_never_reaches_store() {
    let mut service = BoardService::new(RecordingStore::default());
    let err = service.submit_task("todo", " \t ").unwrap_err();
    assert_eq!(err, BoardServiceError::EmptyTaskText);
    assert!(service.store().appended.is_empty());
}

#[test]
fn drop_is_forwarded_once() {
    let mut service = BoardService::new(RecordingStore::default());
    service
        .drop_task(&MoveRequest::between("todo", 0, "done", 0))
        .unwrap();
    assert_eq!(service.into_store().moves, 1);
}

#[test]
fn submit_to_unknown_board_reports_store_error() {
    let mut service = service();
    let err = service.submit_task("archive", "task").unwrap_err();
    assert_eq!(
        err,
        BoardServiceError::Store(StoreError::UnknownBoard("archive".to_string()))
    );
    assert_eq!(service.snapshot().task_count(), 0);
}

#[test]
fn submit_then_drag_across_columns() {
    let mut service = service();
    let first = service.submit_task("todo", "first").unwrap();
    let second = service.submit_task("todo", "second").unwrap();

    let outcome = service
        .drop_task(&MoveRequest::between("todo", 1, "doing", 0))
        .unwrap();
    assert_eq!(outcome, MoveOutcome::Moved);

    let snapshot = service.snapshot();
    assert_eq!(snapshot.tasks("todo").unwrap()[0].id, second);
    assert_eq!(snapshot.tasks("doing").unwrap()[0].id, first);
    assert!(snapshot.tasks("done").unwrap().is_empty());
}

#[test]
fn cancelled_drop_is_silent_success() {
    let mut service = service();
    service.submit_task("todo", "stay").unwrap();
    let before = service.snapshot();

    let outcome = service
        .drop_task(&MoveRequest::from_source("todo", 0))
        .unwrap();

    assert_eq!(outcome, MoveOutcome::Cancelled);
    assert!(Arc::ptr_eq(&before, &service.snapshot()));
}

#[test]
fn columns_render_snapshot_in_board_order() {
    let mut service = service();
    service.submit_task("doing", "ship it").unwrap();

    let columns = BoardColumns::from_snapshot(&service.snapshot());
    let titles: Vec<&str> = columns
        .columns
        .iter()
        .map(|column| column.title.as_str())
        .collect();
    assert_eq!(titles, vec!["todo", "doing", "done"]);
    assert_eq!(columns.columns[0].input_placeholder, "Add Task On todo");
    assert_eq!(columns.columns[1].cards[0].text, "ship it");

    let rendered = columns.to_string();
    assert!(rendered.contains("## doing (1)"));
    assert!(rendered.contains("[Add Task On done]"));
}
