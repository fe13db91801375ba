#![doc = include_str!("../README.md")]

pub mod solver;
pub mod stats;
pub mod puzzle_nxn;
