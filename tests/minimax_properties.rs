//! Properties of the exhaustive minimax evaluator

use std::sync::Arc;

use oxo::{
    MinimaxEvaluator,
    agents::MinimaxAgent,
    pipeline::{play_game, play_match},
    tictactoe::{BoardState, GameOutcome, Player, reachable_states},
};

fn solved() -> MinimaxEvaluator {
    MinimaxEvaluator::from_empty_board().unwrap()
}

#[test]
fn test_empty_board_is_a_draw() {
    let evaluator = solved();
    assert_eq!(evaluator.value(&BoardState::new()).unwrap(), 0);
    assert_eq!(
        evaluator.predicted_outcome(&BoardState::new()).unwrap(),
        GameOutcome::Draw
    );
    assert_eq!(evaluator.len(), 5478);
}

/// The chosen child is never strictly worse than another child for the side
/// to move.
#[test]
fn test_best_move_is_never_strictly_worse() {
    let evaluator = solved();
    for state in reachable_states(BoardState::new()).unwrap() {
        if state.is_terminal() {
            continue;
        }
        let player = state.turn_marker().unwrap();
        let best = evaluator.best_move(&state).unwrap();
        let chosen = evaluator.value(&state.apply_move(best).unwrap()).unwrap();

        for (_, child) in state.successor_states().unwrap() {
            let value = evaluator.value(&child).unwrap();
            match player {
                Player::X => assert!(chosen >= value, "X picked worse move in {state:?}"),
                Player::O => assert!(chosen <= value, "O picked worse move in {state:?}"),
            }
        }
        assert_eq!(evaluator.value(&state).unwrap(), chosen);
    }
}

#[test]
fn test_values_are_bounded() {
    let evaluator = solved();
    for state in reachable_states(BoardState::new()).unwrap() {
        let value = evaluator.value(&state).unwrap();
        assert!((-1..=1).contains(&value));
        if let Some(outcome) = state.outcome() {
            assert_eq!(value, outcome.score());
        }
    }
}

#[test]
fn test_minimax_self_play_ties() {
    let evaluator = Arc::new(solved());
    let mut x = MinimaxAgent::new("x", Arc::clone(&evaluator));
    let mut o = MinimaxAgent::new("o", Arc::clone(&evaluator));

    let record = play_game(&mut x, &mut o).unwrap();
    assert_eq!(record.outcome, GameOutcome::Draw);
    assert_eq!(record.moves.len(), 9);

    // Deterministic tie-breaking reproduces the same game.
    let result = play_match(&mut x, &mut o, 3).unwrap();
    assert_eq!(result.ties, 3);
}

#[test]
fn test_subtree_evaluator_agrees_with_full_tree() {
    let full = solved();
    let root = BoardState::from_string("X...O....").unwrap();
    let partial = MinimaxEvaluator::new(root).unwrap();

    assert!(partial.len() < full.len());
    for state in reachable_states(root).unwrap() {
        assert_eq!(partial.value(&state).unwrap(), full.value(&state).unwrap());
    }
}

#[test]
fn test_merge_of_sibling_subtrees() {
    let full = solved();
    let mut merged = MinimaxEvaluator::new(BoardState::from_string("X........").unwrap()).unwrap();
    let sibling = MinimaxEvaluator::new(BoardState::from_string(".X.......").unwrap()).unwrap();

    merged.merge(&sibling).unwrap();
    for state in reachable_states(sibling.root()).unwrap() {
        assert_eq!(merged.value(&state).unwrap(), full.value(&state).unwrap());
    }
}
