pub mod agent;
pub mod mcts;
pub mod random_rollout;
pub mod search_tree;
