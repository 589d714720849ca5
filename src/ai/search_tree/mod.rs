pub mod node;
pub mod edge;
pub mod stats;

use std::collections::HashSet;

use petgraph::graph::EdgeReference;
use petgraph::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::random_rollout::random_rollout;
use crate::ai::search_tree::edge::SearchEdge;
use crate::ai::search_tree::node::SearchNode;
use crate::ai::search_tree::stats::MoveStats;
use crate::{GameResult, GameState, SearchError};

/// The Monte Carlo search tree for a single move decision.
///
/// Nodes live in a directed graph used as an arena: children are reached
/// through outgoing edges carrying the move that produced them, and the
/// parent link during backpropagation is the (single) incoming edge. Both
/// directions are plain indices, so ownership stays strictly root-to-leaf.
///
/// The tree is built rooted at one position, searched, queried for the best
/// move and then dropped; it is never reused for a later turn.
pub struct SearchTree<S> where S: GameState {
    graph: Graph<SearchNode<S>, SearchEdge<S::Move>, Directed>,
    root_idx: NodeIndex,
    exploration_constant: f64,
}

impl<S> SearchTree<S> where S: GameState {
    /// Creates a tree rooted at `state`.
    ///
    /// Fails with [`SearchError::InvalidState`] if the position is already
    /// decided; there is no move to search for in that case.
    pub fn new(state: S, exploration_constant: f64) -> Result<Self, SearchError> {
        if state.result().is_terminal() {
            return Err(SearchError::InvalidState);
        }

        let mut graph = Graph::new();
        let root_idx = graph.add_node(SearchNode::new(state));
        Ok(Self {
            graph,
            root_idx,
            exploration_constant,
        })
    }

    pub fn graph(&self) -> &Graph<SearchNode<S>, SearchEdge<S::Move>, Directed> {
        &self.graph
    }

    pub fn root_idx(&self) -> NodeIndex {
        self.root_idx
    }

    /// Runs `iterations` full search cycles.
    pub fn search_n<R: Rng>(&mut self, rng: &mut R, iterations: u32) -> Result<(), SearchError> {
        for _ in 0..iterations {
            self.search(rng)?;
        }

        Ok(())
    }

    /// One cycle of the four MCTS phases.
    pub fn search<R: Rng>(&mut self, rng: &mut R) -> Result<(), SearchError> {
        // Selection: descend while the node is fully expanded and the game
        // is still undecided.
        let mut current_idx = self.root_idx;
        while !self.get_node(current_idx).state.result().is_terminal()
            && self.is_fully_expanded(current_idx)
        {
            let (_, child_idx) = self.best_child_by_uct(current_idx)?;
            current_idx = child_idx;
        }

        // Expansion: terminal nodes are simulated as-is, everything else
        // grows one child under a uniformly random unexpanded move.
        if !self.get_node(current_idx).state.result().is_terminal() {
            current_idx = self.expand(rng, current_idx);
        }

        // Simulation: a random playout of transient states, off-tree.
        let result = random_rollout(&self.get_node(current_idx).state, rng);

        // Backpropagation.
        self.back_propagate(current_idx, result);

        Ok(())
    }

    /// True iff every legal move of the node's state already has a child.
    pub fn is_fully_expanded(&self, node_idx: NodeIndex) -> bool {
        let child_count = self
            .graph
            .edges_directed(node_idx, Outgoing)
            .count();
        child_count == self.get_node(node_idx).state.legal_moves().len()
    }

    /// Legal moves of the node's state that have no child yet.
    ///
    /// Recomputed from the live state on every call; expansion is
    /// incremental, so a cached list would go stale.
    pub fn unexpanded_moves(&self, node_idx: NodeIndex) -> Vec<S::Move> {
        let expanded: HashSet<S::Move> = self
            .graph
            .edges_directed(node_idx, Outgoing)
            .map(|edge| edge.weight().mv)
            .collect();

        self.get_node(node_idx)
            .state
            .legal_moves()
            .into_iter()
            .filter(|mv| !expanded.contains(mv))
            .collect()
    }

    /// The child maximizing the UCT1 score
    /// `score / visits + c * sqrt(ln(parent_visits) / visits)`.
    ///
    /// A zero-visit child scores infinity and is always preferred, so every
    /// expanded child gets sampled once before exploitation starts here.
    pub fn best_child_by_uct(
        &self,
        node_idx: NodeIndex,
    ) -> Result<(S::Move, NodeIndex), SearchError> {
        let parent_visits = self.get_node(node_idx).visits;

        let mut best: Option<(S::Move, NodeIndex, f64)> = None;
        for edge in self.graph.edges_directed(node_idx, Outgoing) {
            let value = self.uct_value(parent_visits, edge.target());
            match best {
                Some((_, _, best_value)) if value <= best_value => {}
                _ => best = Some((edge.weight().mv, edge.target(), value)),
            }
        }

        match best {
            Some((mv, child_idx, _)) => Ok((mv, child_idx)),
            None => Err(SearchError::NoChildren),
        }
    }

    /// Upper confidence bound 1 applied to trees.
    fn uct_value(&self, parent_visits: u32, child_idx: NodeIndex) -> f64 {
        let child = self.get_node(child_idx);
        if child.visits == 0 {
            return f64::INFINITY;
        }

        // Exploitation: the average reward of the child, from the
        // perspective of the player choosing between the children.
        let exploitation = child.average_value();

        // Exploration: grows for under-visited children. The caller
        // guarantees parent_visits >= 1, so the logarithm is defined.
        let exploration = self.exploration_constant
            * (f64::ln(parent_visits as f64) / child.visits as f64).sqrt();

        exploitation + exploration
    }

    fn expand<R: Rng>(&mut self, rng: &mut R, node_idx: NodeIndex) -> NodeIndex {
        let unexpanded = self.unexpanded_moves(node_idx);
        // Selection stops at nodes that are not fully expanded, so there is
        // always at least one move here.
        let mv = *unexpanded
            .choose(rng)
            .expect("expansion requires an unexpanded move");

        let state = self.get_node(node_idx).state.apply(mv);
        let child_idx = self.graph.add_node(SearchNode::new(state));
        self.graph.add_edge(node_idx, child_idx, SearchEdge::new(mv));
        child_idx
    }

    /// Updates visits and scores on the path from `node_idx` to the root.
    ///
    /// Each node is credited from the perspective of the player who just
    /// moved to reach it: that is the player whose decision is being judged
    /// when the node is later compared against its siblings.
    fn back_propagate(&mut self, node_idx: NodeIndex, result: GameResult) {
        let mut current_idx = node_idx;
        loop {
            let node = self.get_node_mut(current_idx);
            node.visits += 1;

            let just_moved = node.state.player_to_move().opponent();
            node.score += match result {
                GameResult::Win(winner) if winner == just_moved => 1.0,
                GameResult::Draw => 0.5,
                _ => 0.0,
            };

            match self.parent_idx(current_idx) {
                Some(parent_idx) => current_idx = parent_idx,
                None => break,
            }
        }
    }

    /// The move whose root child collected the most visits.
    ///
    /// Visit count is preferred over average score because it reflects
    /// sustained exploitation rather than a single lucky rollout. Ties keep
    /// the first child encountered in edge-iteration order; that order is
    /// deterministic for a given insertion sequence, so seeded searches
    /// stay reproducible.
    pub fn best_move(&self) -> Result<S::Move, SearchError> {
        let mut best: Option<(S::Move, u32)> = None;
        for edge in self.graph.edges_directed(self.root_idx, Outgoing) {
            let visits = self.get_node(edge.target()).visits;
            match best {
                Some((_, best_visits)) if visits <= best_visits => {}
                _ => best = Some((edge.weight().mv, visits)),
            }
        }

        match best {
            Some((mv, _)) => Ok(mv),
            None => Err(SearchError::NoViableMove),
        }
    }

    /// Per-move statistics of the root's children.
    pub fn root_statistics(&self) -> Vec<MoveStats<S::Move>> {
        self.graph
            .edges_directed(self.root_idx, Outgoing)
            .map(|edge| {
                let child = self.get_node(edge.target());
                MoveStats {
                    mv: edge.weight().mv,
                    visits: child.visits,
                    score: child.score,
                }
            })
            .collect()
    }

    fn get_node(&self, node_idx: NodeIndex) -> &SearchNode<S> {
        self.graph
            .node_weight(node_idx)
            .expect("node index out of arena bounds")
    }

    fn get_node_mut(&mut self, node_idx: NodeIndex) -> &mut SearchNode<S> {
        self.graph
            .node_weight_mut(node_idx)
            .expect("node index out of arena bounds")
    }

    fn parent_idx(&self, node_idx: NodeIndex) -> Option<NodeIndex> {
        self.edge_to_parent(node_idx).map(|edge| edge.source())
    }

    fn edge_to_parent(&self, node_idx: NodeIndex) -> Option<EdgeReference<SearchEdge<S::Move>>> {
        self.graph.edges_directed(node_idx, Incoming).next()
    }
}
