use crate::network::residual_graph::ResidualGraph;

/// Capacity model of a flow network.
///
/// Implementations own the per-arc flow state of a residual graph and answer
/// capacity and saturation queries. The residual graph itself is passed into
/// every call; the model stores only flow.
///
/// An arc is *saturated* when its residual capacity is zero; saturated arcs
/// stay in the residual graph but carry no admissible flow.
pub trait CapacityMixin<Flow> {
    /// Creates the initial (zero-flow) state for `residual_graph`.
    fn from_residual_graph(residual_graph: &ResidualGraph) -> Self;

    /// The upper capacity of an arc.
    fn arc_capacity(&self, residual_graph: &ResidualGraph, arc: usize) -> Flow;

    /// The amount of flow in an arc.
    fn arc_flow(&self, residual_graph: &ResidualGraph, arc: usize) -> Flow;

    /// The remaining capacity of an arc.
    fn arc_residual_capacity(&self, residual_graph: &ResidualGraph, arc: usize) -> Flow;

    fn is_arc_saturated(&self, residual_graph: &ResidualGraph, arc: usize) -> bool;

    /// Adds `delta` units of flow to `arc` and removes them from its
    /// transpose arc. `delta` must be positive and at most the arc's
    /// residual capacity. Node excess bookkeeping is the caller's
    /// responsibility.
    fn increase_arc_flow(&mut self, residual_graph: &ResidualGraph, arc: usize, delta: Flow);
}
