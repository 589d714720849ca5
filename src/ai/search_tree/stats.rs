use crate::Move;

/// Visit statistics for one child of the root, reported after a search.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MoveStats<M> where M: Move {
    pub mv: M,
    pub visits: u32,
    pub score: f64,
}
