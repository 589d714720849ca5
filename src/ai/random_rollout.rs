use rand::seq::SliceRandom;
use rand::Rng;

use crate::{GameResult, GameState};

/// Plays uniformly random legal moves from `state` until the game is
/// decided, and returns that terminal result.
///
/// Only transient copies of the state are touched; the caller's value and
/// the search tree are left alone.
pub fn random_rollout<S: GameState, R: Rng>(state: &S, rng: &mut R) -> GameResult {
    let mut state = state.clone();

    loop {
        let result = state.result();
        if result.is_terminal() {
            return result;
        }

        let moves = state.legal_moves();
        match moves.choose(rng) {
            Some(&mv) => state = state.apply(mv),
            // An ongoing state must offer moves; treat a violation as a
            // dead position rather than spinning forever.
            None => return GameResult::Draw,
        }
    }
}
