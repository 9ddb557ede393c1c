use num_traits::NumAssign;

use crate::network::capacity::CapacityMixin;
use crate::network::residual_graph::ResidualGraph;
use crate::numbers::Infinity;

/// Capacity model for networks whose forward arcs have unbounded capacity.
///
/// Flow is tracked per forward edge. A forward arc can never saturate; its
/// reverse arc's residual capacity equals the flow in the forward twin, so
/// the reverse arc is saturated exactly when the twin carries no flow.
pub struct Uncapacitated<Flow> {
    arc_flow: Vec<Flow>,
}

impl<Flow> CapacityMixin<Flow> for Uncapacitated<Flow>
where
    Flow: NumAssign + PartialOrd + Copy + Infinity,
{
    fn from_residual_graph(residual_graph: &ResidualGraph) -> Self {
        Self { arc_flow: vec![Flow::zero(); residual_graph.num_forward_arcs()] }
    }

    fn arc_capacity(&self, residual_graph: &ResidualGraph, arc: usize) -> Flow {
        assert!(residual_graph.contains_arc(arc));
        Flow::infinity()
    }

    fn arc_flow(&self, residual_graph: &ResidualGraph, arc: usize) -> Flow {
        assert!(residual_graph.contains_arc(arc));
        if !residual_graph.is_forward_arc(arc) {
            return Flow::infinity();
        }
        self.arc_flow[residual_graph.get_edge_id(arc)]
    }

    fn arc_residual_capacity(&self, residual_graph: &ResidualGraph, arc: usize) -> Flow {
        assert!(residual_graph.contains_arc(arc));
        if residual_graph.is_forward_arc(arc) {
            return Flow::infinity();
        }
        let transpose_arc = residual_graph.get_transpose_arc_id(arc);
        self.arc_flow[residual_graph.get_edge_id(transpose_arc)]
    }

    fn is_arc_saturated(&self, residual_graph: &ResidualGraph, arc: usize) -> bool {
        if residual_graph.is_forward_arc(arc) {
            return false;
        }
        self.arc_residual_capacity(residual_graph, arc) == Flow::zero()
    }

    fn increase_arc_flow(&mut self, residual_graph: &ResidualGraph, arc: usize, delta: Flow) {
        assert!(residual_graph.contains_arc(arc));
        debug_assert!(self.arc_residual_capacity(residual_graph, arc) >= delta);

        if residual_graph.is_forward_arc(arc) {
            self.arc_flow[residual_graph.get_edge_id(arc)] += delta;
        } else {
            let transpose_arc = residual_graph.get_transpose_arc_id(arc);
            self.arc_flow[residual_graph.get_edge_id(transpose_arc)] -= delta;
        }
    }
}
