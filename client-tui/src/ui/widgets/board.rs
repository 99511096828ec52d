use crate::state::ClientState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use tictactoe::{Cell, Mark, CELL_COUNT, SIDE};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum BoardSizeVariant {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug)]
struct BoardSize {
    variant: BoardSizeVariant,
    cell_width: u16,
    cell_height: u16,
}

/// Gap between neighbouring cells, drawn as grid lines.
const GAP: u16 = 1;

impl BoardSize {
    const SMALL: Self = Self {
        variant: BoardSizeVariant::Small,
        cell_width: 7,
        cell_height: 3,
    };

    const MEDIUM: Self = Self {
        variant: BoardSizeVariant::Medium,
        cell_width: 11,
        cell_height: 5,
    };

    const LARGE: Self = Self {
        variant: BoardSizeVariant::Large,
        cell_width: 15,
        cell_height: 7,
    };

    /// Calculate the best board size for the given inner area
    fn for_area(area: Rect) -> Self {
        let fits = |size: &Self| {
            size.total_width() <= area.width && size.total_height() <= area.height
        };

        [Self::LARGE, Self::MEDIUM]
            .into_iter()
            .find(fits)
            .unwrap_or(Self::SMALL)
    }

    fn total_width(&self) -> u16 {
        self.cell_width * SIDE as u16 + GAP * (SIDE as u16 - 1)
    }

    fn total_height(&self) -> u16 {
        self.cell_height * SIDE as u16 + GAP * (SIDE as u16 - 1)
    }
}

pub struct BoardWidget<'a> {
    pub client_state: &'a ClientState,
}

impl<'a> BoardWidget<'a> {
    pub fn new(client_state: &'a ClientState) -> Self {
        Self { client_state }
    }

    fn block() -> Block<'static> {
        Block::default()
            .title("# Tic-Tac-Toe #")
            .borders(Borders::ALL)
    }

    /// Screen rect of each cell when the widget is rendered into `area`.
    /// Rendering and mouse hit-testing both go through this.
    pub fn cell_rects(area: Rect) -> [Rect; CELL_COUNT] {
        let inner = Self::block().inner(area);
        let size = BoardSize::for_area(inner);

        let offset_x = inner.width.saturating_sub(size.total_width()) / 2;
        let offset_y = inner.height.saturating_sub(size.total_height()) / 2;
        let start_x = inner.x + offset_x;
        let start_y = inner.y + offset_y;

        std::array::from_fn(|index| {
            let col = (index % SIDE) as u16;
            let row = (index / SIDE) as u16;
            let rect = Rect::new(
                start_x + col * (size.cell_width + GAP),
                start_y + row * (size.cell_height + GAP),
                size.cell_width,
                size.cell_height,
            );
            rect.intersection(inner)
        })
    }

    /// Cell under a terminal position, if any.
    pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
        Self::cell_rects(area)
            .iter()
            .position(|rect| rect.width > 0 && rect.height > 0 && contains(*rect, column, row))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.client_state.ui.theme;
        let game = &self.client_state.game;

        let block = Self::block().border_style(Style::default().fg(theme.board_border));
        let inner = block.inner(area);
        block.render(area, buf);

        let size = BoardSize::for_area(inner);
        let winning_line = game.status().winner().map(|w| w.line);
        let last_move = game.current().last_move.map(|m| m.index);
        let rects = Self::cell_rects(area);

        // Grid lines show through the gaps between cells.
        if let (Some(first), Some(last)) = (rects.first(), rects.last()) {
            let grid = Rect::new(
                first.x,
                first.y,
                last.right().saturating_sub(first.x),
                last.bottom().saturating_sub(first.y),
            )
            .intersection(inner);
            buf.set_style(grid, Style::default().bg(theme.board_border));
        }

        for (index, rect) in rects.iter().enumerate() {
            let cell = game.board().get(index).unwrap_or(Cell::Empty);
            let is_winning = winning_line.is_some_and(|line| line.contains(&index));
            let is_cursor = self.client_state.ui.cursor == index;
            let is_last_move = last_move == Some(index);

            let bg_color = theme.cell_background(is_winning, is_cursor, is_last_move);
            buf.set_style(*rect, Style::default().bg(bg_color));

            match cell.mark() {
                Some(mark) => {
                    let fg_color = match mark {
                        Mark::X => theme.x_mark,
                        Mark::O => theme.o_mark,
                    };
                    render_mark(buf, *rect, mark, size.variant, fg_color, bg_color);
                }
                None => {
                    // Number key hint in the corner of empty cells.
                    if rect.width > 0 && rect.height > 0 {
                        buf.set_string(
                            rect.x,
                            rect.y,
                            (index + 1).to_string(),
                            Style::default().fg(theme.board_label).bg(bg_color),
                        );
                    }
                }
            }
        }
    }
}

fn render_mark(
    buf: &mut Buffer,
    rect: Rect,
    mark: Mark,
    variant: BoardSizeVariant,
    fg_color: Color,
    bg_color: Color,
) {
    let lines = mark_pixel_art(mark, variant);
    let style = Style::default()
        .fg(fg_color)
        .bg(bg_color)
        .add_modifier(Modifier::BOLD);

    let offset_y = rect.height.saturating_sub(lines.len() as u16) / 2;
    for (i, line) in lines.iter().enumerate() {
        let py = rect.y + offset_y + i as u16;
        if py >= rect.bottom() {
            break;
        }
        let line_width = line.chars().count() as u16;
        let px = rect.x + rect.width.saturating_sub(line_width) / 2;
        buf.set_stringn(px, py, line, rect.right().saturating_sub(px) as usize, style);
    }
}

#[rustfmt::skip]
fn mark_pixel_art(mark: Mark, size: BoardSizeVariant) -> &'static [&'static str] {
    match (mark, size) {
        (Mark::X, BoardSizeVariant::Small) => &[
            "╲ ╱",
            " X ",
            "╱ ╲",
        ],
        (Mark::O, BoardSizeVariant::Small) => &[
            "╭─╮",
            "│O│",
            "╰─╯",
        ],
        (Mark::X, BoardSizeVariant::Medium) => &[
            "██   ██",
            " ██ ██ ",
            "  ███  ",
            " ██ ██ ",
            "██   ██",
        ],
        (Mark::O, BoardSizeVariant::Medium) => &[
            " █████ ",
            "██   ██",
            "██   ██",
            "██   ██",
            " █████ ",
        ],
        (Mark::X, BoardSizeVariant::Large) => &[
            "███     ███",
            " ███   ███ ",
            "  ███ ███  ",
            "   █████   ",
            "  ███ ███  ",
            " ███   ███ ",
            "███     ███",
        ],
        (Mark::O, BoardSizeVariant::Large) => &[
            "  ███████  ",
            " ██     ██ ",
            "██       ██",
            "██       ██",
            "██       ██",
            " ██     ██ ",
            "  ███████  ",
        ],
    }
}
