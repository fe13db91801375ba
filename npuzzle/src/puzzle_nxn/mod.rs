pub mod board;
pub mod heuristic;
pub mod neighbors;
