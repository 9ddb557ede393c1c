/// Interface of a directed graph with dense integer handles.
///
/// Vertices are identified by ids in `[0, num_vertices())` and edges by ids
/// in `[0, num_edges())`. `get_vertex_id` / `get_edge_id` recover the dense
/// index of a handle; for the representations in this crate the handle is
/// the index.
pub trait Digraph {
    /// The total number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// The total number of edges in the graph.
    fn num_edges(&self) -> usize;

    /// The unique array index of a vertex, in `[0, num_vertices())`.
    #[inline]
    fn get_vertex_id(&self, vertex: usize) -> usize {
        vertex
    }

    /// The unique array index of an edge, in `[0, num_edges())`.
    #[inline]
    fn get_edge_id(&self, edge: usize) -> usize {
        edge
    }

    #[inline]
    fn contains_vertex(&self, vertex: usize) -> bool {
        self.get_vertex_id(vertex) < self.num_vertices()
    }

    #[inline]
    fn contains_edge(&self, edge: usize) -> bool {
        self.get_edge_id(edge) < self.num_edges()
    }

    /// Iterates over all vertices in id order.
    #[inline]
    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.num_vertices()
    }

    /// Iterates over all edges in id order.
    #[inline]
    fn edges(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.num_edges()
    }

    /// The number of outgoing edges of a vertex.
    fn outdegree(&self, tail: usize) -> usize;

    /// Iterates over the `(edge, head)` pairs of all edges leaving `tail`.
    fn outgoing_edges(&self, tail: usize) -> impl Iterator<Item = (usize, usize)> + '_;
}
