//! Noughts: tic-tac-toe solved against a uniformly random opponent.
//!
//! Enumerates every state reachable from the empty board, then runs value
//! iteration in which X maximizes and O averages over its moves. Exposes the
//! board model, the state graph, the solver, and the tooling around them for
//! use by integration tests and the binary entry point.

pub mod board;
pub mod config;
pub mod engine;
pub mod graph;
pub mod protocol;
pub mod selfplay;
pub mod solve;
