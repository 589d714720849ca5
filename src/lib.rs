mod ai;
pub mod games;

use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

pub use ai::{
    agent::{Agent, MctsAgent, RandomAgent},
    mcts::{select_move, select_move_with_rng, MctsConfig},
    random_rollout::random_rollout,
    search_tree::{edge::SearchEdge, node::SearchNode, stats::MoveStats, SearchTree},
};

/// An opaque move identifier. Concrete games use newtypes over an integer
/// index; equality and ordering are by that index only.
pub trait Move: Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug {}

/// One of the two players of a zero-sum, turn-based game.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// The result of a position, as reported by [`GameState::result`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameResult {
    Ongoing,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::Ongoing
    }
}

/// An immutable board position.
///
/// Applying any move returned by `legal_moves` must succeed, and a terminal
/// state must report an empty legal-move set. `apply` never mutates its
/// receiver; it returns the successor position as a new value.
pub trait GameState: Clone {
    type Move: Move;

    fn legal_moves(&self) -> Vec<Self::Move>;
    fn apply(&self, mv: Self::Move) -> Self;
    fn result(&self) -> GameResult;
    fn player_to_move(&self) -> Player;
}

#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SearchError {
    /// The search was invoked on a state whose result is already decided.
    #[error("cannot search from a terminal game state")]
    InvalidState,

    /// UCT selection reached a fully expanded node with zero children.
    /// Selection only descends into fully expanded non-terminal nodes, so
    /// hitting this indicates a bug in the engine, not a caller mistake.
    #[error("no children available for UCT selection")]
    NoChildren,

    /// The search finished with no children at the root.
    #[error("search produced no viable move at the root")]
    NoViableMove,
}
