use crate::config::Config;
use crate::ui::theme::Theme;
use tictactoe::{Action, GameState, GameStatus, CELL_COUNT};

/// Order in which the history panel lists snapshots. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryOrder {
    #[default]
    Ascending,
    Descending,
}

impl HistoryOrder {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Everything the user can ask the client to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientAction {
    Play(usize),
    PlayAtCursor,
    MoveCursor(CursorDirection),
    JumpTo(usize),
    StepBack,
    StepForward,
    JumpToStart,
    JumpToLatest,
    ToggleOrder,
    ToggleTheme,
    NewGame,
    Quit,
}

/// UI-specific state (not part of game state)
#[derive(Debug, Clone)]
pub struct UiState {
    /// Board cell targeted by Enter/Space.
    pub cursor: usize,
    pub history_order: HistoryOrder,
    pub theme: Theme,
    pub draw_label: String,
    pub should_quit: bool,
}

/// The running session: the game plus the UI state around it.
#[derive(Debug, Clone)]
pub struct ClientState {
    pub game: GameState,
    pub ui: UiState,
}

impl ClientState {
    pub fn new(config: &Config) -> Self {
        Self {
            game: GameState::new(),
            ui: UiState {
                cursor: 4,
                history_order: config.history_order,
                theme: Theme::from_name(config.theme),
                draw_label: config.draw_label.clone(),
                should_quit: false,
            },
        }
    }

    /// Apply one user action.
    pub fn dispatch(&mut self, action: ClientAction) {
        match action {
            ClientAction::Play(index) => self.reduce_game(Action::Play(index)),
            ClientAction::PlayAtCursor => self.reduce_game(Action::Play(self.ui.cursor)),
            ClientAction::MoveCursor(direction) => self.move_cursor(direction),
            ClientAction::JumpTo(step) => self.reduce_game(Action::JumpTo(step)),
            ClientAction::StepBack => {
                if let Some(step) = self.game.current_step().checked_sub(1) {
                    self.reduce_game(Action::JumpTo(step));
                }
            }
            ClientAction::StepForward => {
                let step = self.game.current_step() + 1;
                if step <= self.game.latest_step() {
                    self.reduce_game(Action::JumpTo(step));
                }
            }
            ClientAction::JumpToStart => self.reduce_game(Action::JumpTo(0)),
            ClientAction::JumpToLatest => {
                let latest = self.game.latest_step();
                self.reduce_game(Action::JumpTo(latest));
            }
            ClientAction::ToggleOrder => {
                self.ui.history_order = self.ui.history_order.flipped();
                tracing::debug!(order = ?self.ui.history_order, "History order toggled");
            }
            ClientAction::ToggleTheme => {
                self.ui.theme.toggle();
                tracing::debug!(theme = self.ui.theme.name(), "Theme toggled");
            }
            ClientAction::NewGame => {
                tracing::info!("New game");
                self.game = GameState::new();
            }
            ClientAction::Quit => self.ui.should_quit = true,
        }
    }

    /// Steps in the order the history panel lists them.
    pub fn ordered_steps(&self) -> Vec<usize> {
        let steps = 0..=self.game.latest_step();
        match self.ui.history_order {
            HistoryOrder::Ascending => steps.collect(),
            HistoryOrder::Descending => steps.rev().collect(),
        }
    }

    fn reduce_game(&mut self, action: Action) {
        match self.game.try_reduce(action) {
            Ok(next) => {
                self.game = next;
                match action {
                    Action::Play(_) => {
                        if let Some(mv) = self.game.current().last_move {
                            tracing::info!(
                                step = self.game.current_step(),
                                index = mv.index,
                                mark = %mv.mark,
                                "Move played"
                            );
                        }
                        match self.game.status() {
                            GameStatus::Won(winner) => {
                                tracing::info!(mark = %winner.mark, line = ?winner.line, "Game won")
                            }
                            GameStatus::Draw => tracing::info!("Game drawn"),
                            GameStatus::InProgress { .. } => {}
                        }
                    }
                    Action::JumpTo(step) => tracing::debug!(step, "Jumped to step"),
                }
            }
            Err(e) => tracing::debug!(?action, "Rejected: {}", e),
        }
    }

    fn move_cursor(&mut self, direction: CursorDirection) {
        let (col, row) = (self.ui.cursor % 3, self.ui.cursor / 3);
        let (col, row) = match direction {
            CursorDirection::Up => (col, row.saturating_sub(1)),
            CursorDirection::Down => (col, (row + 1).min(2)),
            CursorDirection::Left => (col.saturating_sub(1), row),
            CursorDirection::Right => ((col + 1).min(2), row),
        };
        self.ui.cursor = (row * 3 + col).min(CELL_COUNT - 1);
    }
}
