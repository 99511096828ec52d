use crate::config::ThemeName;
use ratatui::style::Color;

/// All colors used by the TUI, grouped by purpose.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // ── Board ──────────────────────────────────────────────────────
    pub cell_bg: Color,
    pub x_mark: Color,
    pub o_mark: Color,
    pub board_border: Color,
    pub board_label: Color,

    // ── Overlays ──────────────────────────────────────────────────
    pub overlay_winning: Color,
    pub overlay_cursor: Color,
    pub overlay_last_move: Color,

    // ── Panel chrome ──────────────────────────────────────────────
    pub panel_border: Color,

    // ── Semantic status ───────────────────────────────────────────
    pub positive: Color,
    pub warning: Color,
    pub info: Color,
    pub secondary: Color,
    pub negative: Color,

    // ── Text ──────────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Theme {
    /// Designed for terminals with a dark background.
    pub fn dark() -> Self {
        Self {
            // Use explicit RGB for cells and marks; many terminals remap
            // ANSI colors.
            cell_bg: Color::Rgb(60, 60, 70),
            x_mark: Color::Rgb(255, 120, 120),
            o_mark: Color::Rgb(120, 190, 255),
            board_border: Color::Cyan,
            board_label: Color::Yellow,

            overlay_winning: Color::Rgb(255, 188, 188),
            overlay_cursor: Color::Rgb(110, 110, 60),
            overlay_last_move: Color::Rgb(85, 85, 100),

            panel_border: Color::Cyan,

            positive: Color::Green,
            warning: Color::Yellow,
            info: Color::Cyan,
            secondary: Color::Magenta,
            negative: Color::Red,

            text_primary: Color::White,
            text_secondary: Color::Gray,
        }
    }

    /// Designed for terminals with a light background.
    pub fn light() -> Self {
        Self {
            cell_bg: Color::Rgb(225, 225, 215),
            x_mark: Color::Rgb(190, 40, 40),
            o_mark: Color::Rgb(30, 90, 170),
            board_border: Color::Rgb(60, 60, 60),
            board_label: Color::Rgb(100, 80, 50),

            overlay_winning: Color::Rgb(255, 188, 188),
            overlay_cursor: Color::Rgb(220, 200, 80),
            overlay_last_move: Color::Rgb(205, 205, 190),

            panel_border: Color::Rgb(60, 120, 140),

            positive: Color::Rgb(30, 140, 30),
            warning: Color::Rgb(180, 140, 0),
            info: Color::Rgb(30, 120, 150),
            secondary: Color::Rgb(140, 50, 140),
            negative: Color::Rgb(200, 40, 40),

            text_primary: Color::Rgb(30, 30, 30),
            text_secondary: Color::Rgb(100, 100, 100),
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    /// Toggle between dark and light theme in place.
    pub fn toggle(&mut self) {
        *self = if self.is_dark() {
            Self::light()
        } else {
            Self::dark()
        };
    }

    /// Returns true if this is the dark theme variant.
    pub fn is_dark(&self) -> bool {
        // Dark theme uses ANSI Color::White for text_primary;
        // light theme uses Rgb(30,30,30).
        self.text_primary == Color::White
    }

    /// Human-readable name of the current theme variant.
    pub fn name(&self) -> &'static str {
        if self.is_dark() {
            "Dark"
        } else {
            "Light"
        }
    }

    /// Background for a board cell given its overlays. The winning line
    /// takes precedence over the cursor, the cursor over the last move.
    pub fn cell_background(&self, winning: bool, cursor: bool, last_move: bool) -> Color {
        if winning {
            self.overlay_winning
        } else if cursor {
            self.overlay_cursor
        } else if last_move {
            self.overlay_last_move
        } else {
            self.cell_bg
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
