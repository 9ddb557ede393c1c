//! Building blocks for minimum-cost flow algorithms based on residual-graph
//! search: predecessor forests, a Dial's-algorithm shortest-path engine, and
//! flow networks with reduced arc costs.

pub mod graph;
pub mod network;
pub mod numbers;
