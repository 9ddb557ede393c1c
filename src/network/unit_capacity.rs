use std::marker::PhantomData;

use num_traits::PrimInt;

use crate::network::capacity::CapacityMixin;
use crate::network::residual_graph::ResidualGraph;

/// Capacity model for networks whose arcs carry at most one unit of flow.
///
/// Only a saturation bit per arc is stored. Initially every forward arc is
/// unsaturated and every reverse arc saturated; pushing the single unit
/// through an arc flips the bit on the arc and on its transpose.
pub struct UnitCapacity<Flow> {
    is_arc_saturated: Vec<bool>,
    marker: PhantomData<Flow>,
}

impl<Flow: PrimInt> CapacityMixin<Flow> for UnitCapacity<Flow> {
    fn from_residual_graph(residual_graph: &ResidualGraph) -> Self {
        let is_arc_saturated =
            residual_graph.arcs().map(|arc| !residual_graph.is_forward_arc(arc)).collect();
        Self { is_arc_saturated, marker: PhantomData }
    }

    fn arc_capacity(&self, residual_graph: &ResidualGraph, arc: usize) -> Flow {
        assert!(residual_graph.contains_arc(arc));
        Flow::one()
    }

    fn arc_flow(&self, residual_graph: &ResidualGraph, arc: usize) -> Flow {
        if self.is_arc_saturated(residual_graph, arc) {
            Flow::one()
        } else {
            Flow::zero()
        }
    }

    fn arc_residual_capacity(&self, residual_graph: &ResidualGraph, arc: usize) -> Flow {
        if self.is_arc_saturated(residual_graph, arc) {
            Flow::zero()
        } else {
            Flow::one()
        }
    }

    fn is_arc_saturated(&self, residual_graph: &ResidualGraph, arc: usize) -> bool {
        self.is_arc_saturated[residual_graph.get_arc_id(arc)]
    }

    fn increase_arc_flow(&mut self, residual_graph: &ResidualGraph, arc: usize, delta: Flow) {
        let arc_id = residual_graph.get_arc_id(arc);
        assert!(!self.is_arc_saturated[arc_id], "arc is saturated");
        assert!(delta == Flow::one());
        let transpose_arc_id = residual_graph.get_transpose_arc_id(arc);
        self.is_arc_saturated[arc_id] = true;
        self.is_arc_saturated[transpose_arc_id] = false;
    }
}
