pub mod csr_digraph;
pub mod dial;
pub mod digraph;
pub mod forest;
pub mod shortest_path_forest;
