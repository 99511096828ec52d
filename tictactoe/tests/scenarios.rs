use tictactoe::{detect_winner, Board, Cell, GameState, GameStatus, Mark, Winner};

fn play(moves: &[usize]) -> GameState {
    moves
        .iter()
        .fold(GameState::new(), |state, &index| state.apply_move(index))
}

#[test]
fn x_wins_on_the_diagonal() {
    let game = play(&[0, 3, 4, 6, 8]);
    let winner = Winner {
        line: [0, 4, 8],
        mark: Mark::X,
    };

    assert_eq!(game.history().len(), 6);
    assert_eq!(detect_winner(game.board()), Some(winner));
    assert_eq!(game.status(), GameStatus::Won(winner));
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    // X O X
    // O X X
    // O X O
    let game = play(&[0, 1, 2, 3, 4, 8, 5, 6, 7]);

    assert_eq!(
        *game.board(),
        Board::from_pattern("XOX OXX OXO").unwrap()
    );
    assert_eq!(detect_winner(game.board()), None);
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn clicking_an_occupied_cell_changes_nothing() {
    let game = play(&[4]);
    let before = *game.board();

    let game = game.apply_move(4);
    assert_eq!(game.history().len(), 2);
    assert_eq!(*game.board(), before);
    assert_eq!(game.board().get(4), Some(Cell::X));
    assert!(!game.is_x_next());
}

#[test]
fn time_travel_then_branch() {
    let game = play(&[0, 1, 2, 3, 4]);
    assert_eq!(game.latest_step(), 5);

    // Browsing does not discard anything.
    let game = game.jump_to(0).jump_to(3).jump_to(5).jump_to(2);
    assert_eq!(game.latest_step(), 5);
    assert_eq!(game.active_mark(), Mark::X);

    // Playing from step 2 replaces moves 3..5.
    let game = game.apply_move(8);
    assert_eq!(game.latest_step(), 3);
    assert_eq!(
        *game.board(),
        Board::from_pattern("XO. ... ..X").unwrap()
    );
    assert_eq!(game.status(), GameStatus::InProgress { next: Mark::O });
}
