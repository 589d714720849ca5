use crate::Move;

/// The move that produced the target node from the source node.
///
/// Edges are the tree's child mapping: one outgoing edge per expanded move,
/// keyed by the move itself, so sparse move spaces need no dense indexing.
pub struct SearchEdge<M> where M: Move {
    pub mv: M,
}

impl<M> SearchEdge<M> where M: Move {
    pub fn new(mv: M) -> Self {
        Self { mv }
    }
}
