//! Shortest word-chain search
//!
//! This module contains the best-first search engine and its frontier.

mod engine;
pub mod frontier;

pub use engine::{SearchReport, SearchStats, Solver, SolverConfig};
pub use frontier::{Admission, Frontier};
