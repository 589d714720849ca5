use crate::GameState;

/// One node of the search tree: a position plus its visit statistics.
///
/// `score` accumulates 1.0 per favorable rollout, 0.5 per draw and 0.0
/// otherwise, always from the perspective of the player who just moved to
/// reach this position. The invariant `0.0 <= score <= visits` holds at
/// all times.
pub struct SearchNode<S> where S: GameState {
    pub state: S,
    pub visits: u32,
    pub score: f64,
}

impl<S> SearchNode<S> where S: GameState {
    pub fn new(state: S) -> Self {
        Self {
            state,
            visits: 0,
            score: 0.0,
        }
    }

    /// Average rollout value of this node, `score / visits`.
    ///
    /// Only meaningful once the node has been visited at least once; the
    /// engine never reads it on a zero-visit node.
    pub fn average_value(&self) -> f64 {
        self.score / self.visits as f64
    }
}
