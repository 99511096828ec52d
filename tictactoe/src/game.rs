use crate::board::{coordinates, detect_winner, Board, Winner};
use crate::types::Mark;

/// A single placement: which cell, and who played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub index: usize,
    pub mark: Mark,
}

impl Move {
    /// 1-based column of the played cell.
    pub fn column(&self) -> usize {
        coordinates(self.index).0
    }

    /// 1-based row of the played cell.
    pub fn row(&self) -> usize {
        coordinates(self.index).1
    }
}

/// Board after a move, plus the move that produced it (`None` at game start).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub last_move: Option<Move>,
}

impl Snapshot {
    fn initial() -> Self {
        Self {
            board: Board::empty(),
            last_move: None,
        }
    }
}

/// Status of the displayed snapshot. Exactly one of the three holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { next: Mark },
    Won(Winner),
    Draw,
}

impl GameStatus {
    /// Derive the status of a board given the mark that would move next.
    pub fn of(board: &Board, next: Mark) -> Self {
        if let Some(winner) = detect_winner(board) {
            Self::Won(winner)
        } else if board.is_full() {
            Self::Draw
        } else {
            Self::InProgress { next }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }

    pub fn winner(&self) -> Option<Winner> {
        match self {
            Self::Won(winner) => Some(*winner),
            _ => None,
        }
    }
}

/// An input to [`GameState::reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play(usize),
    JumpTo(usize),
}

/// Full game state: every snapshot so far and which one is displayed.
///
/// Transitions consume the state and return the next one. Rejected
/// transitions return the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Snapshot>,
    current_step: usize,
    x_is_next: bool,
}

impl GameState {
    /// Create a game holding only the empty starting snapshot.
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_step: 0,
            x_is_next: true,
        }
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the newest snapshot, which may be ahead of the current step.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    pub fn board(&self) -> &Board {
        &self.current().board
    }

    pub fn is_x_next(&self) -> bool {
        self.x_is_next
    }

    pub fn active_mark(&self) -> Mark {
        if self.x_is_next {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.board(), self.active_mark())
    }

    /// Play the active mark at `index`, or return the state unchanged if the
    /// move is not allowed.
    pub fn apply_move(self, index: usize) -> Self {
        match self.try_apply_move(index) {
            Ok(next) => next,
            Err(_) => self,
        }
    }

    /// Play the active mark at `index`.
    ///
    /// Any snapshots after the current step are discarded before the new one
    /// is appended.
    pub fn try_apply_move(&self, index: usize) -> Result<Self, GameError> {
        let board = *self.board();
        let cell = board.get(index).ok_or(GameError::CellOutOfRange(index))?;

        if self.status().is_terminal() {
            return Err(GameError::GameOver);
        }
        if !cell.is_empty() {
            return Err(GameError::CellOccupied(index));
        }

        let mark = self.active_mark();
        let mut history = self.history[..=self.current_step].to_vec();
        history.push(Snapshot {
            board: board.with_mark(index, mark),
            last_move: Some(Move { index, mark }),
        });

        Ok(Self {
            current_step: history.len() - 1,
            history,
            x_is_next: !self.x_is_next,
        })
    }

    /// Display the snapshot at `step`. History is left intact; only a later
    /// move discards the snapshots after it.
    pub fn jump_to(self, step: usize) -> Self {
        match self.try_jump_to(step) {
            Ok(next) => next,
            Err(_) => self,
        }
    }

    pub fn try_jump_to(&self, step: usize) -> Result<Self, GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                latest: self.latest_step(),
            });
        }
        Ok(Self {
            history: self.history.clone(),
            current_step: step,
            x_is_next: step % 2 == 0,
        })
    }

    /// Apply an action, returning the state unchanged if it is rejected.
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::Play(index) => self.apply_move(index),
            Action::JumpTo(step) => self.jump_to(step),
        }
    }

    pub fn try_reduce(&self, action: Action) -> Result<Self, GameError> {
        match action {
            Action::Play(index) => self.try_apply_move(index),
            Action::JumpTo(step) => self.try_jump_to(step),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell {0} is already occupied")]
    CellOccupied(usize),
    #[error("Cell {0} is off the board")]
    CellOutOfRange(usize),
    #[error("Game is over")]
    GameOver,
    #[error("Step {step} is out of range (latest is {latest})")]
    StepOutOfRange { step: usize, latest: usize },
}
