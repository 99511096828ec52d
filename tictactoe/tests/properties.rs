//! Property-based tests for game-state transitions.

use proptest::prelude::*;
use tictactoe::{detect_winner, Action, Board, Cell, GameState, Mark, CELL_COUNT, LINES};

// =============================================================================
// Strategies
// =============================================================================

fn arb_cell() -> impl Strategy<Value = char> {
    prop_oneof![Just('.'), Just('X'), Just('O')]
}

/// Any assignment of cells, reachable by play or not.
fn arb_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(arb_cell(), CELL_COUNT).prop_map(|cells| {
        let pattern: String = cells.into_iter().collect();
        Board::from_pattern(&pattern).unwrap()
    })
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..CELL_COUNT).prop_map(Action::Play),
        1 => (0usize..10).prop_map(Action::JumpTo),
    ]
}

/// A game reached by a random sequence of plays and jumps.
fn arb_game() -> impl Strategy<Value = GameState> {
    proptest::collection::vec(arb_action(), 0..30)
        .prop_map(|actions| actions.into_iter().fold(GameState::new(), GameState::reduce))
}

fn line_owner(board: &Board, line: [usize; 3]) -> Option<Mark> {
    let mark = board.get(line[0])?.mark()?;
    line.iter()
        .all(|&i| board.get(i) == Some(Cell::from(mark)))
        .then_some(mark)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn winner_iff_some_line_is_owned(board in arb_board()) {
        let first_owned = LINES
            .iter()
            .find_map(|&line| line_owner(&board, line).map(|mark| (line, mark)));

        match detect_winner(&board) {
            Some(winner) => {
                prop_assert_eq!(Some((winner.line, winner.mark)), first_owned);
            }
            None => prop_assert_eq!(first_owned, None),
        }
    }

    #[test]
    fn rejected_plays_leave_state_unchanged(game in arb_game(), index in 0usize..CELL_COUNT) {
        let occupied = game.board().get(index) != Some(Cell::Empty);
        let terminal = game.status().is_terminal();

        let after = game.clone().apply_move(index);
        if occupied || terminal {
            prop_assert_eq!(after.history().len(), game.history().len());
            prop_assert_eq!(after.current_step(), game.current_step());
            prop_assert_eq!(after, game);
        } else {
            prop_assert_eq!(after.current_step(), game.current_step() + 1);
        }
    }

    #[test]
    fn history_grows_by_one_per_accepted_move(indices in proptest::collection::vec(0usize..CELL_COUNT, 0..20)) {
        let mut game = GameState::new();
        let mut accepted = 0usize;
        for index in indices {
            if let Ok(next) = game.try_apply_move(index) {
                game = next;
                accepted += 1;
            }
        }
        prop_assert_eq!(game.history().len(), accepted + 1);
        prop_assert_eq!(game.current_step(), accepted);
    }

    #[test]
    fn jump_shows_requested_snapshot(game in arb_game(), raw_step in 0usize..10) {
        let step = raw_step % game.history().len();
        let jumped = game.clone().jump_to(step);

        prop_assert_eq!(jumped.board(), &game.history()[step].board);
        prop_assert_eq!(jumped.is_x_next(), step % 2 == 0);
        prop_assert_eq!(jumped.history(), game.history());
    }

    #[test]
    fn play_after_jump_replaces_future(game in arb_game(), raw_step in 0usize..10, index in 0usize..CELL_COUNT) {
        let step = raw_step % game.history().len();
        let jumped = game.clone().jump_to(step);

        if let Ok(next) = jumped.try_apply_move(index) {
            prop_assert_eq!(next.history().len(), step + 2);
            prop_assert_eq!(&next.history()[..=step], &game.history()[..=step]);
        }
    }

    #[test]
    fn snapshots_differ_by_one_alternating_mark(game in arb_game()) {
        prop_assert_eq!(game.history()[0].board, Board::empty());
        prop_assert!(game.current_step() < game.history().len());
        prop_assert_eq!(game.is_x_next(), game.current_step() % 2 == 0);

        for (step, pair) in game.history().windows(2).enumerate() {
            let (before, after) = (&pair[0].board, &pair[1].board);
            let changed: Vec<usize> = (0..CELL_COUNT)
                .filter(|&i| before.get(i) != after.get(i))
                .collect();
            prop_assert_eq!(changed.len(), 1);

            let index = changed[0];
            let expected = Mark::for_step(step);
            prop_assert_eq!(before.get(index), Some(Cell::Empty));
            prop_assert_eq!(after.get(index), Some(Cell::from(expected)));

            let mv = pair[1].last_move.unwrap();
            prop_assert_eq!((mv.index, mv.mark), (index, expected));
        }
    }
}
