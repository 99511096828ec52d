use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ControlsPanel<'a> {
    pub theme: &'a Theme,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Lines needed to show every control, borders included.
    pub const HEIGHT: u16 = 11;
}

fn key_line(key: &'static str, color: Color, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(action),
    ])
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title("Controls")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            key_line("1-9 ", theme.positive, "Play cell / click a cell"),
            key_line("Arrows/hjkl ", theme.positive, "Move cursor"),
            key_line("Enter/Space ", theme.positive, "Play at cursor"),
            key_line("PgUp/PgDn [ ] ", theme.info, "Step back / forward"),
            key_line("Home/End ", theme.info, "Game start / latest"),
            key_line("o ", theme.secondary, "Reorder history"),
            key_line("t ", theme.secondary, "Toggle theme"),
            key_line("n ", theme.warning, "New game"),
            key_line("q/Esc/Ctrl+C ", theme.negative, "Quit"),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
