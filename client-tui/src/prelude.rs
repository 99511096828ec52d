// Re-export config types
pub use crate::config::{Config, Overrides, ThemeName};

// Re-export state types
pub use crate::state::{ClientAction, ClientState, CursorDirection, HistoryOrder};

// Re-export UI types
pub use crate::ui::{
    input::{action_for_key, action_for_mouse},
    layout::AppLayout,
    render_loop::render,
    theme::Theme,
    widgets::{BoardWidget, ControlsPanel, GameInfoPanel, HistoryRow, MoveHistoryPanel},
};
