use crate::graph::digraph::Digraph;
use crate::graph::forest::{Forest, Predecessors};
use crate::numbers::Infinity;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Label {
    Unreached,
    Reached,
    Visited,
}

/// A predecessor forest augmented with per-vertex search state.
///
/// Each vertex carries a label and a tentative distance. Within one search a
/// vertex's label only moves forward: unreached, then reached (a distance
/// has been assigned), then visited (the distance is final). Vertices may be
/// reached multiple times but visited at most once; re-labelling a visited
/// vertex is a programming error.
pub struct ShortestPathForest<'g, G, D> {
    forest: Forest<'g, G>,
    label: Vec<Label>,
    distance: Vec<D>,
}

impl<'g, G, D> ShortestPathForest<'g, G, D>
where
    G: Digraph,
    D: Copy + PartialOrd + Infinity,
{
    /// Creates a forest with every vertex unreached at infinite distance.
    pub fn new(graph: &'g G) -> Self {
        let num_vertices = graph.num_vertices();
        Self {
            forest: Forest::new(graph),
            label: vec![Label::Unreached; num_vertices],
            distance: vec![D::infinity(); num_vertices],
        }
    }

    #[inline]
    pub fn graph(&self) -> &'g G {
        self.forest.graph()
    }

    pub fn has_reached_vertex(&self, vertex: usize) -> bool {
        assert!(self.graph().contains_vertex(vertex));
        self.label[self.graph().get_vertex_id(vertex)] != Label::Unreached
    }

    pub fn has_visited_vertex(&self, vertex: usize) -> bool {
        assert!(self.graph().contains_vertex(vertex));
        self.label[self.graph().get_vertex_id(vertex)] == Label::Visited
    }

    /// Marks an unvisited vertex as reached.
    pub fn label_vertex_reached(&mut self, vertex: usize) {
        assert!(self.graph().contains_vertex(vertex));
        assert!(!self.has_visited_vertex(vertex), "vertex was already visited");
        let vertex_id = self.graph().get_vertex_id(vertex);
        self.label[vertex_id] = Label::Reached;
    }

    /// Marks an unvisited vertex as visited, committing its distance.
    pub fn label_vertex_visited(&mut self, vertex: usize) {
        assert!(self.graph().contains_vertex(vertex));
        assert!(!self.has_visited_vertex(vertex), "vertex was already visited");
        let vertex_id = self.graph().get_vertex_id(vertex);
        self.label[vertex_id] = Label::Visited;
    }

    /// Iterates over all reached (or visited) vertices in id order.
    pub fn reached_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.graph().vertices().filter(|&vertex| self.has_reached_vertex(vertex))
    }

    /// Iterates over all visited vertices in id order.
    pub fn visited_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.graph().vertices().filter(|&vertex| self.has_visited_vertex(vertex))
    }

    pub fn distance_to_vertex(&self, vertex: usize) -> D {
        assert!(self.graph().contains_vertex(vertex));
        self.distance[self.graph().get_vertex_id(vertex)]
    }

    /// Overwrites the tentative distance of `vertex`. The caller is
    /// responsible for only lowering distances during a search.
    pub fn set_distance_to_vertex(&mut self, vertex: usize, distance: D) {
        assert!(self.graph().contains_vertex(vertex));
        let vertex_id = self.graph().get_vertex_id(vertex);
        self.distance[vertex_id] = distance;
    }

    /// Restores the initial state: all vertices unreached singleton roots at
    /// infinite distance.
    pub fn reset(&mut self) {
        self.forest.reset();
        self.label.fill(Label::Unreached);
        self.distance.fill(D::infinity());
    }

    // Forest operations, forwarded.

    #[inline]
    pub fn edge_fill_value(&self) -> usize {
        self.forest.edge_fill_value()
    }

    #[inline]
    pub fn predecessor_vertex(&self, vertex: usize) -> usize {
        self.forest.predecessor_vertex(vertex)
    }

    #[inline]
    pub fn predecessor_edge(&self, vertex: usize) -> usize {
        self.forest.predecessor_edge(vertex)
    }

    #[inline]
    pub fn predecessor(&self, vertex: usize) -> (usize, usize) {
        self.forest.predecessor(vertex)
    }

    #[inline]
    pub fn predecessors(&self, vertex: usize) -> Predecessors<'_, 'g, G> {
        self.forest.predecessors(vertex)
    }

    #[inline]
    pub fn set_predecessor(&mut self, vertex: usize, pred_vertex: usize, pred_edge: usize) {
        self.forest.set_predecessor(vertex, pred_vertex, pred_edge);
    }

    #[inline]
    pub fn make_root_vertex(&mut self, vertex: usize) {
        self.forest.make_root_vertex(vertex);
    }

    #[inline]
    pub fn is_root_vertex(&self, vertex: usize) -> bool {
        self.forest.is_root_vertex(vertex)
    }
}
