use crate::config::Config;
use crate::state::ClientState;
use crate::ui::input::{action_for_key, action_for_mouse};
use crate::ui::layout::AppLayout;
use crate::ui::widgets::{BoardWidget, ControlsPanel, GameInfoPanel, MoveHistoryPanel};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the TUI until the user quits.
pub fn run_app(config: &Config) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = ClientState::new(config);
    let result = run_game(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_game<B: Backend>(terminal: &mut Terminal<B>, state: &mut ClientState) -> anyhow::Result<()> {
    while !state.ui.should_quit {
        let mut layout = AppLayout::new(Rect::default());
        terminal.draw(|f| {
            layout = AppLayout::new(f.area());
            render(f, &layout, state);
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let action = match event::read()? {
            Event::Key(key) => action_for_key(key),
            Event::Mouse(mouse) => action_for_mouse(mouse, &layout, state),
            _ => None,
        };
        if let Some(action) = action {
            state.dispatch(action);
        }
    }
    Ok(())
}

/// Draw every panel for the current state.
pub fn render(frame: &mut Frame, layout: &AppLayout, state: &ClientState) {
    frame.render_widget(BoardWidget::new(state), layout.board);
    frame.render_widget(GameInfoPanel::new(state), layout.info);
    frame.render_widget(MoveHistoryPanel::new(state), layout.history);
    frame.render_widget(ControlsPanel::new(&state.ui.theme), layout.controls);
}
