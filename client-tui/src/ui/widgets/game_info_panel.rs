use crate::state::ClientState;
use crate::ui::format::status_line;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tictactoe::{GameStatus, Mark};

/// Status line plus the step being viewed.
pub struct GameInfoPanel<'a> {
    pub client_state: &'a ClientState,
}

impl<'a> GameInfoPanel<'a> {
    pub fn new(client_state: &'a ClientState) -> Self {
        Self { client_state }
    }
}

impl Widget for GameInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.client_state.ui.theme;
        let game = &self.client_state.game;

        let block = Block::default()
            .title("Game Info")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let status = game.status();
        let status_color = match status {
            GameStatus::Won(winner) => match winner.mark {
                Mark::X => theme.x_mark,
                Mark::O => theme.o_mark,
            },
            GameStatus::Draw => theme.warning,
            GameStatus::InProgress { .. } => theme.positive,
        };

        let mut lines = vec![Line::from(Span::styled(
            status_line(&status, &self.client_state.ui.draw_label),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ))];

        // Only worth mentioning while browsing the past.
        if game.current_step() < game.latest_step() {
            lines.push(Line::from(vec![
                Span::styled("Viewing: ", Style::default().fg(theme.info)),
                Span::styled(
                    format!("step {} of {}", game.current_step(), game.latest_step()),
                    Style::default().fg(theme.text_secondary),
                ),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
