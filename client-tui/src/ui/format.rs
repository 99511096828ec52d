use crate::state::HistoryOrder;
use tictactoe::{GameStatus, Snapshot};

/// Label for a history entry: the start, or the move with its (column,row).
pub fn history_label(step: usize, snapshot: &Snapshot) -> String {
    match snapshot.last_move {
        Some(mv) if step > 0 => format!("Go to move #{} ({},{})", step, mv.column(), mv.row()),
        _ => "Go to game start".to_string(),
    }
}

pub fn status_line(status: &GameStatus, draw_label: &str) -> String {
    match status {
        GameStatus::Won(winner) => format!("Winner: {}", winner.mark),
        GameStatus::Draw => draw_label.to_string(),
        GameStatus::InProgress { next } => format!("Next player: {}", next),
    }
}

pub fn order_label(order: HistoryOrder) -> &'static str {
    match order {
        HistoryOrder::Ascending => "Move history (ascending)",
        HistoryOrder::Descending => "Move history (descending)",
    }
}
