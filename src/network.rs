pub mod capacity;
pub mod network;
pub mod residual_graph;
pub mod uncapacitated;
pub mod unit_capacity;
