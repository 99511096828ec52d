// UI modules
pub mod format;
pub mod layout;
pub mod theme;
pub mod widgets;

// Main entry points
pub mod input;
pub mod render_loop;

pub use render_loop::run_app;
