use crate::state::ClientState;
use crate::ui::format::{history_label, order_label};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// What a row of the history panel does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRow {
    ToggleOrder,
    Step(usize),
}

/// The order toggle, then one entry per snapshot in the chosen order.
pub struct MoveHistoryPanel<'a> {
    pub client_state: &'a ClientState,
}

impl<'a> MoveHistoryPanel<'a> {
    pub fn new(client_state: &'a ClientState) -> Self {
        Self { client_state }
    }

    fn block() -> Block<'static> {
        Block::default()
            .title("Move History (o to reorder)")
            .borders(Borders::ALL)
    }

    /// Number of entries scrolled off the top so the current step stays
    /// visible. The toggle row is pinned and never scrolls.
    fn scroll(client_state: &ClientState, inner: Rect) -> u16 {
        let visible = usize::from(inner.height.saturating_sub(1));
        let steps = client_state.ordered_steps();
        if visible == 0 || steps.len() <= visible {
            return 0;
        }
        let position = steps
            .iter()
            .position(|&step| step == client_state.game.current_step())
            .unwrap_or(0);
        let offset = position
            .saturating_sub(visible - 1)
            .min(steps.len() - visible);
        u16::try_from(offset).unwrap_or(u16::MAX)
    }

    /// Row under a terminal position when the panel is rendered into `area`.
    pub fn row_at(
        client_state: &ClientState,
        area: Rect,
        column: u16,
        row: u16,
    ) -> Option<HistoryRow> {
        let inner = Self::block().inner(area);
        if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
            return None;
        }
        let line = usize::from(row - inner.y);
        if line == 0 {
            return Some(HistoryRow::ToggleOrder);
        }
        let scroll = usize::from(Self::scroll(client_state, inner));
        client_state
            .ordered_steps()
            .get(scroll + line - 1)
            .copied()
            .map(HistoryRow::Step)
    }
}

impl Widget for MoveHistoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.client_state.ui.theme;
        let game = &self.client_state.game;

        let block = Self::block().border_style(Style::default().fg(theme.panel_border));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }
        let [toggle_area, entries_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        Paragraph::new(Line::from(Span::styled(
            format!("[{}]", order_label(self.client_state.ui.history_order)),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )))
        .render(toggle_area, buf);

        let lines: Vec<Line> = self
            .client_state
            .ordered_steps()
            .into_iter()
            .map(|step| {
                let label = history_label(step, &game.history()[step]);
                let is_current = step == game.current_step();
                let style = if is_current {
                    Style::default()
                        .fg(theme.text_primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_secondary)
                };
                let marker = if is_current { "> " } else { "  " };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.info)),
                    Span::styled(label, style),
                ])
            })
            .collect();

        let scroll = Self::scroll(self.client_state, inner);
        Paragraph::new(lines)
            .scroll((scroll, 0))
            .render(entries_area, buf);
    }
}
