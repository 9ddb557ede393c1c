use std::collections::VecDeque;

use num_traits::{AsPrimitive, NumAssign, PrimInt, Signed};
use tracing::debug;

use crate::graph::digraph::Digraph;
use crate::graph::forest::Predecessors;
use crate::graph::shortest_path_forest::ShortestPathForest;
use crate::network::capacity::CapacityMixin;
use crate::network::network::Network;
use crate::network::residual_graph::ResidualGraph;
use crate::numbers::Infinity;

/// The largest finite reduced cost among admissible arcs in a network.
///
/// Saturated arcs are skipped, as are arcs with infinite reduced cost.
/// Admissible reduced costs must not be NaN or negative. Returns zero when
/// no admissible arc exists.
pub fn max_admissible_arc_length<Flow, Cost, C>(network: &Network<Flow, Cost, C>) -> Cost
where
    Flow: NumAssign + Signed + PartialOrd + Copy + AsPrimitive<Cost>,
    Cost: NumAssign + Signed + PartialOrd + Copy + Infinity + 'static,
    C: CapacityMixin<Flow>,
{
    let mut max_arc_length = Cost::zero();

    for tail in network.nodes() {
        for (arc, head) in network.outgoing_arcs(tail) {
            if network.is_arc_saturated(arc) {
                continue;
            }

            let arc_length = network.arc_reduced_cost(arc, tail, head);
            assert!(!arc_length.is_nan_value(), "reduced cost must not be NaN");
            assert!(arc_length >= Cost::zero(), "reduced cost must be non-negative");
            if arc_length.is_infinity() {
                continue;
            }

            if arc_length > max_arc_length {
                max_arc_length = arc_length;
            }
        }
    }

    max_arc_length
}

/// Dial's algorithm: a shortest-path vertex scheduler over integer edge
/// lengths.
///
/// Vertices waiting to be visited sit in a circular array of FIFO buckets
/// indexed by `distance % num_buckets`. With all edge lengths in `[0, L]`
/// and at least `L + 1` buckets, the first unvisited vertex found at or
/// after the current cursor position always has the minimum distance among
/// all unvisited reached vertices, so a full priority queue is unnecessary.
///
/// The scheduler does not support decrease-key: when a relaxation lowers a
/// vertex's distance the vertex is simply pushed into its new bucket, and
/// the superseded entry is discarded lazily by [`done`](Dial::done) once the
/// vertex has been visited.
pub struct Dial<'g, G, D> {
    shortest_paths: ShortestPathForest<'g, G, D>,
    buckets: Vec<VecDeque<usize>>,
    current_bucket_id: usize,
}

impl<'g, G, D> Dial<'g, G, D>
where
    G: Digraph,
    D: PrimInt + Infinity,
{
    /// Creates a scheduler with `num_buckets` empty buckets over `graph`.
    pub fn new(graph: &'g G, num_buckets: usize) -> Self {
        Self {
            shortest_paths: ShortestPathForest::new(graph),
            buckets: (0..num_buckets).map(|_| VecDeque::new()).collect(),
            current_bucket_id: 0,
        }
    }

    #[inline]
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn current_bucket_id(&self) -> usize {
        self.current_bucket_id
    }

    /// The bucket index of a non-negative distance: `distance % num_buckets`.
    pub fn get_bucket_id(&self, distance: D) -> usize {
        debug_assert!(distance >= D::zero());
        let distance = distance.to_usize().expect("distance must be a non-negative integer");
        distance % self.num_buckets()
    }

    #[inline]
    pub fn bucket(&self, bucket_id: usize) -> &VecDeque<usize> {
        assert!(bucket_id < self.buckets.len());
        &self.buckets[bucket_id]
    }

    #[inline]
    fn current_bucket_mut(&mut self) -> &mut VecDeque<usize> {
        &mut self.buckets[self.current_bucket_id]
    }

    /// Moves the cursor to the next bucket in the ring. No-op when the ring
    /// is empty.
    pub fn advance_current_bucket(&mut self) {
        let num_buckets = self.num_buckets();
        if num_buckets == 0 {
            return;
        }
        self.current_bucket_id = (self.current_bucket_id + 1) % num_buckets;
    }

    /// Appends an already-reached vertex to the bucket of `distance`.
    pub fn push_vertex(&mut self, vertex: usize, distance: D) {
        assert!(self.graph().contains_vertex(vertex));
        assert!(distance >= D::zero());
        assert!(self.num_buckets() >= 1);
        debug_assert!(self.has_reached_vertex(vertex));

        let bucket_id = self.get_bucket_id(distance);
        self.buckets[bucket_id].push_back(vertex);
    }

    /// Adds a search source: an unreached vertex that becomes a tree root at
    /// distance zero. Multiple sources may be added before the first visit.
    pub fn add_source(&mut self, source: usize) {
        assert!(self.graph().contains_vertex(source));
        assert!(!self.has_reached_vertex(source), "source was already reached");
        assert!(self.num_buckets() > 0);

        self.shortest_paths.make_root_vertex(source);
        debug_assert!(self.shortest_paths.predecessor_vertex(source) == source);

        self.shortest_paths.label_vertex_reached(source);
        self.shortest_paths.set_distance_to_vertex(source, D::zero());
        self.push_vertex(source, D::zero());
    }

    /// Removes and returns the front of the current bucket together with its
    /// distance.
    ///
    /// The current bucket must be non-empty with an unvisited front, which
    /// is exactly what a false return from [`done`](Dial::done) guarantees.
    pub fn pop_next_unvisited_vertex(&mut self) -> (usize, D) {
        let front = self.current_bucket_mut().pop_front().expect("current bucket is empty");
        debug_assert!(self.has_reached_vertex(front));
        debug_assert!(!self.has_visited_vertex(front));
        (front, self.shortest_paths.distance_to_vertex(front))
    }

    /// Records `tail` as the predecessor of `head` via `edge`, labels `head`
    /// reached at `distance`, and enqueues it.
    pub fn reach_vertex(&mut self, edge: usize, tail: usize, head: usize, distance: D) {
        assert!(self.graph().contains_edge(edge));
        assert!(self.graph().contains_vertex(tail));
        assert!(self.graph().contains_vertex(head));
        assert!(distance >= D::zero());

        debug_assert!(self.has_visited_vertex(tail));
        debug_assert!(!self.has_visited_vertex(head));
        debug_assert!(distance >= self.distance_to_vertex(tail));

        self.shortest_paths.set_predecessor(head, tail, edge);
        debug_assert!(!self.is_root_vertex(head));
        self.shortest_paths.label_vertex_reached(head);
        self.shortest_paths.set_distance_to_vertex(head, distance);
        self.push_vertex(head, distance);
    }

    /// Commits a reached vertex's distance as final.
    pub fn visit_vertex(&mut self, vertex: usize, distance: D) {
        assert!(self.graph().contains_vertex(vertex));
        assert!(distance >= D::zero());
        debug_assert!(self.has_reached_vertex(vertex));
        self.shortest_paths.label_vertex_visited(vertex);
    }

    /// Relaxes an edge out of a visited `tail`: if `distance` improves on
    /// `head`'s recorded distance, `head` is re-reached through this edge;
    /// otherwise nothing happens. This is the only operation that lowers a
    /// recorded distance; the entry pushed for the old distance goes stale
    /// and is discarded lazily by [`done`](Dial::done).
    pub fn relax_edge(&mut self, edge: usize, tail: usize, head: usize, distance: D) {
        assert!(self.graph().contains_edge(edge));
        assert!(self.graph().contains_vertex(tail));
        assert!(self.graph().contains_vertex(head));
        assert!(distance >= D::zero());

        debug_assert!(self.has_visited_vertex(tail));
        debug_assert!(distance >= self.distance_to_vertex(tail));

        if distance < self.distance_to_vertex(head) {
            self.reach_vertex(edge, tail, head, distance);
        }
    }

    /// Whether no unvisited vertex remains in any bucket.
    ///
    /// Cycles the cursor through the ring, dropping stale (already visited)
    /// entries from the front of each bucket, until an unvisited front is
    /// found or the cursor comes back around to its starting position.
    pub fn done(&mut self) -> bool {
        if self.num_buckets() == 0 {
            return true;
        }

        let old_bucket_id = self.current_bucket_id();
        loop {
            while let Some(front) = self.buckets[self.current_bucket_id].front().copied() {
                if !self.has_visited_vertex(front) {
                    return false;
                }
                self.current_bucket_mut().pop_front();
            }

            self.advance_current_bucket();
            debug_assert!(self.current_bucket_id() < self.num_buckets());

            if self.current_bucket_id() == old_bucket_id {
                return true;
            }
        }
    }

    /// Restores the initial state: forest reset, all buckets empty, cursor
    /// on bucket zero.
    pub fn reset(&mut self) {
        self.shortest_paths.reset();
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.current_bucket_id = 0;
    }

    // Shortest-path forest queries, forwarded.

    #[inline]
    pub fn graph(&self) -> &'g G {
        self.shortest_paths.graph()
    }

    #[inline]
    pub fn has_reached_vertex(&self, vertex: usize) -> bool {
        self.shortest_paths.has_reached_vertex(vertex)
    }

    #[inline]
    pub fn has_visited_vertex(&self, vertex: usize) -> bool {
        self.shortest_paths.has_visited_vertex(vertex)
    }

    #[inline]
    pub fn distance_to_vertex(&self, vertex: usize) -> D {
        self.shortest_paths.distance_to_vertex(vertex)
    }

    #[inline]
    pub fn is_root_vertex(&self, vertex: usize) -> bool {
        self.shortest_paths.is_root_vertex(vertex)
    }

    #[inline]
    pub fn predecessor_vertex(&self, vertex: usize) -> usize {
        self.shortest_paths.predecessor_vertex(vertex)
    }

    #[inline]
    pub fn predecessor_edge(&self, vertex: usize) -> usize {
        self.shortest_paths.predecessor_edge(vertex)
    }

    #[inline]
    pub fn predecessor(&self, vertex: usize) -> (usize, usize) {
        self.shortest_paths.predecessor(vertex)
    }

    #[inline]
    pub fn predecessors(&self, vertex: usize) -> Predecessors<'_, 'g, G> {
        self.shortest_paths.predecessors(vertex)
    }

    pub fn reached_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.shortest_paths.reached_vertices()
    }

    pub fn visited_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.shortest_paths.visited_vertices()
    }
}

impl<'g, D> Dial<'g, ResidualGraph, D>
where
    D: PrimInt + Infinity + NumAssign + Signed + 'static,
{
    /// Creates a scheduler over a network's residual graph, sized so that
    /// every admissible arc fits within one lap of the bucket ring:
    /// `num_buckets = max_admissible_arc_length + 1`.
    ///
    /// The network's cost scalar doubles as the distance scalar, so costs
    /// must be integral here.
    pub fn from_network<Flow, C>(network: &'g Network<Flow, D, C>) -> Self
    where
        Flow: NumAssign + Signed + PartialOrd + Copy + AsPrimitive<D>,
        C: CapacityMixin<Flow>,
    {
        let max_arc_length = max_admissible_arc_length(network);
        let num_buckets =
            max_arc_length.to_usize().expect("max arc length must be non-negative") + 1;
        debug!(num_buckets, "sized bucket ring from max admissible arc length");
        Self::new(network.residual_graph(), num_buckets)
    }
}
