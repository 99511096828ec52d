use crate::state::{ClientAction, ClientState};
use crate::ui::widgets::{BoardWidget, ControlsPanel, HistoryRow, MoveHistoryPanel};
use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the right-hand column holding the info, history and controls panels.
const SIDEBAR_WIDTH: u16 = 36;

/// Status line plus an optional "viewing" line, inside borders.
const INFO_HEIGHT: u16 = 4;

/// Panel placement for one frame. Rendering and mouse hit-testing both use
/// this so a click always lands on what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub board: Rect,
    pub info: Rect,
    pub history: Rect,
    pub controls: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [board, sidebar] =
            Layout::horizontal([Constraint::Min(25), Constraint::Length(SIDEBAR_WIDTH)])
                .areas(area);
        let [info, history, controls] = Layout::vertical([
            Constraint::Length(INFO_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(ControlsPanel::HEIGHT),
        ])
        .areas(sidebar);

        Self {
            board,
            info,
            history,
            controls,
        }
    }

    /// Action for a click at a terminal position, if it hit anything.
    pub fn action_at(&self, state: &ClientState, column: u16, row: u16) -> Option<ClientAction> {
        if let Some(index) = BoardWidget::cell_at(self.board, column, row) {
            return Some(ClientAction::Play(index));
        }
        match MoveHistoryPanel::row_at(state, self.history, column, row)? {
            HistoryRow::ToggleOrder => Some(ClientAction::ToggleOrder),
            HistoryRow::Step(step) => Some(ClientAction::JumpTo(step)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn layout() -> AppLayout {
        AppLayout::new(Rect::new(0, 0, 100, 40))
    }

    #[test]
    fn panels_do_not_overlap() {
        let layout = layout();
        let panels = [layout.board, layout.info, layout.history, layout.controls];
        for (i, a) in panels.iter().enumerate() {
            assert!(a.width > 0 && a.height > 0);
            for b in panels.iter().skip(i + 1) {
                assert!(!a.intersects(*b));
            }
        }
        assert_eq!(layout.history.width, SIDEBAR_WIDTH);
        assert_eq!(layout.controls.height, ControlsPanel::HEIGHT);
    }

    #[test]
    fn click_on_cell_plays_it() {
        let layout = layout();
        let state = ClientState::new(&Config::default());
        let rect = BoardWidget::cell_rects(layout.board)[7];

        assert_eq!(
            layout.action_at(&state, rect.x + 1, rect.y + 1),
            Some(ClientAction::Play(7))
        );
    }

    #[test]
    fn click_on_history_rows() {
        let layout = layout();
        let mut state = ClientState::new(&Config::default());
        state.dispatch(ClientAction::Play(0));
        state.dispatch(ClientAction::Play(1));

        // First row inside the border is the order toggle.
        let x = layout.history.x + 2;
        let top = layout.history.y + 1;
        assert_eq!(
            layout.action_at(&state, x, top),
            Some(ClientAction::ToggleOrder)
        );
        assert_eq!(
            layout.action_at(&state, x, top + 1),
            Some(ClientAction::JumpTo(0))
        );
        assert_eq!(
            layout.action_at(&state, x, top + 3),
            Some(ClientAction::JumpTo(2))
        );
        assert_eq!(layout.action_at(&state, x, top + 4), None);

        state.dispatch(ClientAction::ToggleOrder);
        assert_eq!(
            layout.action_at(&state, x, top + 1),
            Some(ClientAction::JumpTo(2))
        );
    }

    #[test]
    fn click_on_border_or_controls_does_nothing() {
        let layout = layout();
        let state = ClientState::new(&Config::default());

        assert_eq!(layout.action_at(&state, layout.history.x, layout.history.y), None);
        assert_eq!(
            layout.action_at(&state, layout.controls.x + 2, layout.controls.y + 2),
            None
        );
    }

    #[test]
    fn standard_terminal_keeps_current_step_clickable() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.history, Rect::new(44, 4, 36, 9));

        let mut state = ClientState::new(&Config::default());
        for index in [0, 1, 2, 3, 4, 8, 5, 6, 7] {
            state.dispatch(ClientAction::Play(index));
        }

        // Seven inner rows: the pinned toggle, then steps 4..=9.
        let x = layout.history.x + 2;
        let top = layout.history.y + 1;
        assert_eq!(
            layout.action_at(&state, x, top),
            Some(ClientAction::ToggleOrder)
        );
        assert_eq!(
            layout.action_at(&state, x, top + 1),
            Some(ClientAction::JumpTo(4))
        );
        assert_eq!(
            layout.action_at(&state, x, top + 6),
            Some(ClientAction::JumpTo(9))
        );

        // Back at the start, the list scrolls up again.
        state.dispatch(ClientAction::JumpTo(0));
        assert_eq!(
            layout.action_at(&state, x, top + 1),
            Some(ClientAction::JumpTo(0))
        );
        assert_eq!(
            layout.action_at(&state, x, top + 6),
            Some(ClientAction::JumpTo(5))
        );
    }
}
