pub mod board;
pub mod game;
pub mod types;

pub use board::{
    coordinates, detect_winner, Board, BoardError, Line, Winner, CELL_COUNT, LINES, SIDE,
};
pub use game::{Action, GameError, GameState, GameStatus, Move, Snapshot};
pub use types::{Cell, Mark};
