//! End-to-end optimal play: known-best replies and full self-play games

use oxo::{BoardState, Game, GameOutcome, MinimaxEngine, Move, Player};

#[test]
fn corner_opening_is_answered_with_the_center() {
    // X takes the corner (0,0); the only optimal reply for O is the
    // center (1,1).
    let state = BoardState::new().make_move(0).unwrap();
    let engine = MinimaxEngine::new(Player::O);

    let mut cells = state.cells;
    let mv = engine.best_move(&mut cells).unwrap();

    assert_eq!((mv.row(), mv.col()), (1, 1));
}

#[test]
fn optimal_self_play_ends_in_a_draw() {
    let mut state = BoardState::new();
    let mut plies = 0;

    while !state.is_terminal() {
        let engine = MinimaxEngine::new(state.to_move);
        let mut cells = state.cells;
        let mv = engine.best_move(&mut cells).unwrap();

        assert_eq!(cells, state.cells, "search must not change the position");
        state = state.make_move(mv.position()).unwrap();
        plies += 1;
    }

    assert_eq!(plies, 9, "an optimal game fills the whole board");
    assert!(state.is_draw());
    assert_eq!(state.winner(), None);
}

#[test]
fn optimal_self_play_draws_from_any_opening() {
    // Whatever X opens with, two optimal players finish in a draw.
    for opening in 0..9 {
        let mut game = Game::new();
        game.play(Move::from_position(opening).unwrap()).unwrap();

        while game.outcome.is_none() {
            let state = game.current_state().unwrap();
            let engine = MinimaxEngine::new(state.to_move);
            let mut cells = state.cells;
            let mv = engine.best_move(&mut cells).unwrap();
            game.play(mv).unwrap();
        }

        assert_eq!(
            game.outcome,
            Some(GameOutcome::Draw),
            "opening {opening} should be drawn under optimal play"
        );
    }
}

#[test]
fn engine_converts_a_blunder_into_a_win() {
    // X opens in a corner and O answers on an edge instead of the
    // center. Only the center holds against a corner opening, so X now
    // has a forced win against any defense.
    let mut state = BoardState::new();
    for pos in [0, 1] {
        state = state.make_move(pos).unwrap();
    }

    let engine = MinimaxEngine::new(Player::X);
    let mut cells = state.cells;
    let best = engine
        .move_scores(&mut cells)
        .unwrap()
        .into_iter()
        .map(|(_, score)| score)
        .max()
        .unwrap();
    assert!(best > 0, "X should have a forced win, got {best}");

    let mut game = Game::new();
    for pos in [0, 1] {
        game.play(Move::from_position(pos).unwrap()).unwrap();
    }
    while game.outcome.is_none() {
        let state = game.current_state().unwrap();
        let engine = MinimaxEngine::new(state.to_move);
        let mut cells = state.cells;
        let mv = engine.best_move(&mut cells).unwrap();
        game.play(mv).unwrap();
    }

    assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
}
