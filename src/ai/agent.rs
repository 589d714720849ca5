use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::mcts::select_move_with_rng;
use crate::{GameState, SearchError};

/// Something that can pick a move for the player to move.
pub trait Agent<S: GameState> {
    fn choose_move<R: Rng>(&self, rng: &mut R, state: &S) -> Result<S::Move, SearchError>;
}

/// Picks uniformly among the legal moves. A useful baseline opponent.
#[derive(Debug, Clone, Default)]
pub struct RandomAgent;

impl<S: GameState> Agent<S> for RandomAgent {
    fn choose_move<R: Rng>(&self, rng: &mut R, state: &S) -> Result<S::Move, SearchError> {
        if state.result().is_terminal() {
            return Err(SearchError::InvalidState);
        }

        state
            .legal_moves()
            .choose(rng)
            .copied()
            .ok_or(SearchError::NoViableMove)
    }
}

/// Runs a fresh Monte Carlo tree search on every turn.
#[derive(Debug, Clone)]
pub struct MctsAgent {
    pub simulations: u32,
    pub exploration_constant: f64,
}

impl MctsAgent {
    pub fn new(simulations: u32) -> Self {
        Self {
            simulations,
            exploration_constant: f64::sqrt(2.0),
        }
    }
}

impl<S: GameState> Agent<S> for MctsAgent {
    fn choose_move<R: Rng>(&self, rng: &mut R, state: &S) -> Result<S::Move, SearchError> {
        select_move_with_rng(state, rng, self.simulations, self.exploration_constant)
    }
}
