pub mod config;
pub mod prelude;
mod state;
pub mod ui;

pub use config::{Config, ConfigError, Overrides, ThemeName};
pub use state::{ClientAction, ClientState, CursorDirection, HistoryOrder, UiState};

pub use ui::widgets;
