//! Plain-text render layer for board snapshots.
//!
//! Reads one snapshot per render and never mutates it.

use crate::model::board::BoardSnapshot;
use crate::model::task::TaskId;
use std::fmt::{Display, Formatter};

/// One rendered task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub task_id: TaskId,
    pub text: String,
}

/// One rendered board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub title: String,
    pub input_placeholder: String,
    pub cards: Vec<CardView>,
}

/// All columns, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumns {
    pub columns: Vec<ColumnView>,
}

impl BoardColumns {
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Self {
        let columns = snapshot
            .boards()
            .iter()
            .map(|board| ColumnView {
                title: board.id.clone(),
                input_placeholder: format!("Add Task On {}", board.id),
                cards: board
                    .tasks
                    .iter()
                    .enumerate()
                    .map(|(index, task)| CardView {
                        index,
                        task_id: task.id,
                        text: task.text.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self { columns }
    }
}

impl Display for BoardColumns {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (position, column) in self.columns.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            writeln!(f, "## {} ({})", column.title, column.cards.len())?;
            if column.cards.is_empty() {
                writeln!(f, "  [{}]", column.input_placeholder)?;
            }
            for card in &column.cards {
                writeln!(f, "  {}. {} #{}", card.index, card.text, card.task_id)?;
            }
        }
        Ok(())
    }
}
