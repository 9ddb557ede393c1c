use crate::graph::digraph::Digraph;

/// A forest of rooted trees over the vertices of a directed graph.
///
/// Each vertex stores its predecessor (parent) vertex and the edge from the
/// parent to itself. A vertex whose predecessor is itself is a tree root.
/// Initially every vertex is the root of a singleton tree.
///
/// The forest borrows the graph for its whole lifetime; the graph topology
/// must not change underneath it.
pub struct Forest<'g, G> {
    graph: &'g G,
    pred_vertex: Vec<usize>,
    pred_edge: Vec<usize>,
    edge_fill_value: usize,
}

impl<'g, G: Digraph> Forest<'g, G> {
    /// Creates a forest of singleton trees with the default edge-fill
    /// sentinel, `usize::MAX`.
    pub fn new(graph: &'g G) -> Self {
        Self::with_edge_fill_value(graph, usize::MAX)
    }

    /// Creates a forest of singleton trees whose predecessor-edge slots are
    /// initialized (and reset) to `edge_fill_value`.
    pub fn with_edge_fill_value(graph: &'g G, edge_fill_value: usize) -> Self {
        let num_vertices = graph.num_vertices();
        Self {
            graph,
            pred_vertex: (0..num_vertices).collect(),
            pred_edge: vec![edge_fill_value; num_vertices],
            edge_fill_value,
        }
    }

    #[inline]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// The sentinel stored in the predecessor-edge slot of root vertices.
    #[inline]
    pub fn edge_fill_value(&self) -> usize {
        self.edge_fill_value
    }

    /// The predecessor vertex of `vertex`. Returns `vertex` itself for a
    /// root.
    pub fn predecessor_vertex(&self, vertex: usize) -> usize {
        assert!(self.graph.contains_vertex(vertex));
        self.pred_vertex[self.graph.get_vertex_id(vertex)]
    }

    /// The edge from the predecessor of `vertex` to `vertex`.
    ///
    /// Meaningful only for non-root vertices; for a root it returns the
    /// edge-fill sentinel.
    pub fn predecessor_edge(&self, vertex: usize) -> usize {
        assert!(self.graph.contains_vertex(vertex));
        self.pred_edge[self.graph.get_vertex_id(vertex)]
    }

    /// The `(predecessor vertex, predecessor edge)` pair of `vertex`.
    pub fn predecessor(&self, vertex: usize) -> (usize, usize) {
        (self.predecessor_vertex(vertex), self.predecessor_edge(vertex))
    }

    /// Walks the predecessor chain of `vertex`, yielding one
    /// `(predecessor vertex, predecessor edge)` pair per hop, up to but not
    /// including the root. Empty when `vertex` is a root.
    pub fn predecessors(&self, vertex: usize) -> Predecessors<'_, 'g, G> {
        assert!(self.graph.contains_vertex(vertex));
        Predecessors { forest: self, vertex }
    }

    /// Sets the predecessor of `vertex`.
    ///
    /// Either `vertex == pred_vertex` (marking a root) or `pred_edge` must
    /// be a valid edge of the graph from `pred_vertex` to `vertex`.
    pub fn set_predecessor(&mut self, vertex: usize, pred_vertex: usize, pred_edge: usize) {
        assert!(self.graph.contains_vertex(vertex));
        assert!(self.graph.contains_vertex(pred_vertex));
        debug_assert!(vertex == pred_vertex || self.graph.contains_edge(pred_edge));
        let vertex_id = self.graph.get_vertex_id(vertex);
        self.pred_vertex[vertex_id] = pred_vertex;
        self.pred_edge[vertex_id] = pred_edge;
    }

    /// Makes `vertex` the root of its tree.
    pub fn make_root_vertex(&mut self, vertex: usize) {
        assert!(self.graph.contains_vertex(vertex));
        let vertex_id = self.graph.get_vertex_id(vertex);
        self.pred_vertex[vertex_id] = vertex;
        self.pred_edge[vertex_id] = self.edge_fill_value;
    }

    pub fn is_root_vertex(&self, vertex: usize) -> bool {
        self.predecessor_vertex(vertex) == vertex
    }

    /// Restores the initial state: every vertex a singleton root.
    pub fn reset(&mut self) {
        for (vertex_id, pred) in self.pred_vertex.iter_mut().enumerate() {
            *pred = vertex_id;
        }
        self.pred_edge.fill(self.edge_fill_value);
    }
}

/// Iterator over the predecessor chain of a vertex, ending at the root.
pub struct Predecessors<'a, 'g, G> {
    forest: &'a Forest<'g, G>,
    vertex: usize,
}

impl<G: Digraph> Iterator for Predecessors<'_, '_, G> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.forest.is_root_vertex(self.vertex) {
            return None;
        }
        let pred = self.forest.predecessor(self.vertex);
        self.vertex = pred.0;
        Some(pred)
    }
}
