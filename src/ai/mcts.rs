use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::search_tree::SearchTree;
use crate::{GameState, SearchError};

/// Tuning knobs for one [`select_move`] call.
///
/// More simulations mean stronger and slower play; a larger exploration
/// constant biases selection toward under-visited branches. Two calls with
/// the same root state and the same `rng_seed` return the same move and
/// the same visit distribution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MctsConfig {
    pub simulations: u32,
    pub exploration_constant: f64,
    pub rng_seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            simulations: 1000,
            exploration_constant: f64::sqrt(2.0),
            rng_seed: None,
        }
    }
}

/// Picks a move for the player to move at `state` by running a fresh MCTS
/// search; the tree is discarded before returning.
pub fn select_move<S: GameState>(state: &S, config: &MctsConfig) -> Result<S::Move, SearchError> {
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    select_move_with_rng(state, &mut rng, config.simulations, config.exploration_constant)
}

/// As [`select_move`], but with a caller-owned random source. Useful when
/// one RNG drives a whole game or a test harness.
pub fn select_move_with_rng<S: GameState, R: Rng>(
    state: &S,
    rng: &mut R,
    simulations: u32,
    exploration_constant: f64,
) -> Result<S::Move, SearchError> {
    let mut tree = SearchTree::new(state.clone(), exploration_constant)?;
    tree.search_n(rng, simulations)?;
    tree.best_move()
}
