use num_traits::{AsPrimitive, NumAssign, Signed};
use tracing::debug;

use crate::network::capacity::CapacityMixin;
use crate::network::residual_graph::ResidualGraph;
use crate::network::uncapacitated::Uncapacitated;
use crate::network::unit_capacity::UnitCapacity;
use crate::numbers::Infinity;

/// A flow network over a residual graph.
///
/// Stores per-node excess (signed flow imbalance) and potential (dual
/// variable), and per-arc unit costs; per-arc flow lives in the capacity
/// model `C`. Reverse arcs carry the negated cost of their forward twin, so
/// pushing flow backwards cancels cost.
pub struct Network<Flow, Cost, C> {
    residual_graph: ResidualGraph,
    capacity: C,
    node_excess: Vec<Flow>,
    node_potential: Vec<Cost>,
    arc_cost: Vec<Cost>,
}

/// Network whose forward arcs have unbounded capacity.
pub type UncapacitatedNetwork<Flow, Cost> = Network<Flow, Cost, Uncapacitated<Flow>>;

/// Network whose arcs carry at most one unit of flow.
pub type UnitCapacityNetwork<Flow, Cost> = Network<Flow, Cost, UnitCapacity<Flow>>;

impl<Flow, Cost, C> Network<Flow, Cost, C>
where
    Flow: NumAssign + Signed + PartialOrd + Copy + AsPrimitive<Cost>,
    Cost: NumAssign + Signed + PartialOrd + Copy + Infinity + 'static,
    C: CapacityMixin<Flow>,
{
    /// Creates a network over `residual_graph`.
    ///
    /// `surplus` supplies the initial excess of every node (length
    /// `num_nodes`). `forward_cost` supplies the non-negative, finite unit
    /// cost of every original edge (length `num_forward_arcs`); reverse arcs
    /// get the negated cost. All potentials start at zero.
    pub fn new(
        residual_graph: ResidualGraph,
        surplus: impl IntoIterator<Item = Flow>,
        forward_cost: &[Cost],
    ) -> Self {
        let capacity = C::from_residual_graph(&residual_graph);
        let node_excess: Vec<Flow> = surplus.into_iter().collect();
        assert_eq!(
            node_excess.len(),
            residual_graph.num_nodes(),
            "surplus length must equal the number of nodes"
        );
        let arc_cost = make_residual_arc_costs(&residual_graph, forward_cost);
        let node_potential = vec![Cost::zero(); residual_graph.num_nodes()];

        debug!(
            num_nodes = residual_graph.num_nodes(),
            num_arcs = residual_graph.num_arcs(),
            "constructed flow network"
        );

        Self { residual_graph, capacity, node_excess, node_potential, arc_cost }
    }

    #[inline]
    pub fn residual_graph(&self) -> &ResidualGraph {
        &self.residual_graph
    }

    // Residual-graph queries, forwarded.

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.residual_graph.num_nodes()
    }

    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.residual_graph.num_arcs()
    }

    #[inline]
    pub fn num_forward_arcs(&self) -> usize {
        self.residual_graph.num_forward_arcs()
    }

    #[inline]
    pub fn contains_node(&self, node: usize) -> bool {
        self.residual_graph.contains_node(node)
    }

    #[inline]
    pub fn contains_arc(&self, arc: usize) -> bool {
        self.residual_graph.contains_arc(arc)
    }

    #[inline]
    pub fn get_node_id(&self, node: usize) -> usize {
        self.residual_graph.get_node_id(node)
    }

    #[inline]
    pub fn get_arc_id(&self, arc: usize) -> usize {
        self.residual_graph.get_arc_id(arc)
    }

    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.residual_graph.nodes()
    }

    pub fn arcs(&self) -> impl Iterator<Item = usize> + '_ {
        self.residual_graph.arcs()
    }

    pub fn forward_arcs(&self) -> impl Iterator<Item = usize> + '_ {
        self.residual_graph.forward_arcs()
    }

    pub fn outgoing_arcs(&self, node: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.residual_graph.outgoing_arcs(node)
    }

    #[inline]
    pub fn is_forward_arc(&self, arc: usize) -> bool {
        self.residual_graph.is_forward_arc(arc)
    }

    #[inline]
    pub fn get_transpose_arc_id(&self, arc: usize) -> usize {
        self.residual_graph.get_transpose_arc_id(arc)
    }

    #[inline]
    pub fn get_edge_id(&self, forward_arc: usize) -> usize {
        self.residual_graph.get_edge_id(forward_arc)
    }

    // Capacity queries, forwarded to the capacity model.

    #[inline]
    pub fn arc_capacity(&self, arc: usize) -> Flow {
        self.capacity.arc_capacity(&self.residual_graph, arc)
    }

    #[inline]
    pub fn arc_flow(&self, arc: usize) -> Flow {
        self.capacity.arc_flow(&self.residual_graph, arc)
    }

    #[inline]
    pub fn arc_residual_capacity(&self, arc: usize) -> Flow {
        self.capacity.arc_residual_capacity(&self.residual_graph, arc)
    }

    #[inline]
    pub fn is_arc_saturated(&self, arc: usize) -> bool {
        self.capacity.is_arc_saturated(&self.residual_graph, arc)
    }

    #[inline]
    pub fn increase_arc_flow(&mut self, arc: usize, delta: Flow) {
        self.capacity.increase_arc_flow(&self.residual_graph, arc, delta);
    }

    // Node excess.

    pub fn node_excess(&self, node: usize) -> Flow {
        assert!(self.contains_node(node));
        self.node_excess[self.get_node_id(node)]
    }

    pub fn increase_node_excess(&mut self, node: usize, delta: Flow) {
        assert!(self.contains_node(node));
        let node_id = self.get_node_id(node);
        self.node_excess[node_id] += delta;
    }

    pub fn decrease_node_excess(&mut self, node: usize, delta: Flow) {
        assert!(self.contains_node(node));
        let node_id = self.get_node_id(node);
        self.node_excess[node_id] -= delta;
    }

    /// Whether `node` has strictly positive excess.
    pub fn is_excess_node(&self, node: usize) -> bool {
        self.node_excess(node) > Flow::zero()
    }

    /// Whether `node` has strictly negative excess.
    pub fn is_deficit_node(&self, node: usize) -> bool {
        self.node_excess(node) < Flow::zero()
    }

    pub fn excess_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes().filter(|&node| self.is_excess_node(node))
    }

    pub fn deficit_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes().filter(|&node| self.is_deficit_node(node))
    }

    /// The summed surplus of all excess nodes.
    pub fn total_excess(&self) -> Flow {
        self.excess_nodes()
            .fold(Flow::zero(), |total, node| total + self.node_excess(node))
    }

    /// The summed (negative) surplus of all deficit nodes.
    pub fn total_deficit(&self) -> Flow {
        self.deficit_nodes()
            .fold(Flow::zero(), |total, node| total + self.node_excess(node))
    }

    /// Whether the excesses over all nodes sum to zero.
    pub fn is_balanced(&self) -> bool {
        let imbalance =
            self.node_excess.iter().fold(Flow::zero(), |total, &excess| total + excess);
        imbalance == Flow::zero()
    }

    // Node potentials and arc costs.

    pub fn node_potential(&self, node: usize) -> Cost {
        assert!(self.contains_node(node));
        self.node_potential[self.get_node_id(node)]
    }

    pub fn increase_node_potential(&mut self, node: usize, delta: Cost) {
        assert!(self.contains_node(node));
        let node_id = self.get_node_id(node);
        self.node_potential[node_id] += delta;
    }

    pub fn decrease_node_potential(&mut self, node: usize, delta: Cost) {
        assert!(self.contains_node(node));
        let node_id = self.get_node_id(node);
        self.node_potential[node_id] -= delta;
    }

    /// The cost per unit of flow in an arc (negative for reverse arcs).
    pub fn arc_cost(&self, arc: usize) -> Cost {
        assert!(self.contains_arc(arc));
        self.arc_cost[self.get_arc_id(arc)]
    }

    /// The arc cost adjusted by the endpoint potentials:
    /// `arc_cost(arc) - potential(tail) + potential(head)`.
    pub fn arc_reduced_cost(&self, arc: usize, tail: usize, head: usize) -> Cost {
        assert!(self.contains_arc(arc));
        assert!(self.contains_node(tail));
        assert!(self.contains_node(head));
        self.arc_cost(arc) - self.node_potential(tail) + self.node_potential(head)
    }

    /// The total cost of the current flow, summed over forward arcs.
    pub fn total_cost(&self) -> Cost {
        self.forward_arcs().fold(Cost::zero(), |total, arc| {
            let flow: Cost = self.arc_flow(arc).as_();
            total + self.arc_cost(arc) * flow
        })
    }
}

fn make_residual_arc_costs<Cost>(
    residual_graph: &ResidualGraph,
    forward_cost: &[Cost],
) -> Vec<Cost>
where
    Cost: NumAssign + Signed + PartialOrd + Copy + Infinity,
{
    assert_eq!(
        forward_cost.len(),
        residual_graph.num_forward_arcs(),
        "cost length must equal the number of forward arcs"
    );

    residual_graph
        .arcs()
        .map(|arc| {
            let edge_id = if residual_graph.is_forward_arc(arc) {
                residual_graph.get_edge_id(arc)
            } else {
                residual_graph.get_edge_id(residual_graph.get_transpose_arc_id(arc))
            };
            let cost = forward_cost[edge_id];
            assert!(!cost.is_nan_value(), "arc cost must not be NaN");
            assert!(cost >= Cost::zero(), "arc cost must be non-negative");
            assert!(!cost.is_infinity(), "arc cost must be finite");
            if residual_graph.is_forward_arc(arc) {
                cost
            } else {
                -cost
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> 1 -> 2 with supply at 0 and demand at 2.
    fn chain() -> UnitCapacityNetwork<i64, i64> {
        let residual_graph = ResidualGraph::from_edges(3, &[(0, 1), (1, 2)]);
        Network::new(residual_graph, vec![1, 0, -1], &[2, 3])
    }

    #[test]
    fn reverse_arcs_carry_negated_costs() {
        let network = chain();
        assert_eq!(network.arc_cost(0), 2);
        assert_eq!(network.arc_cost(1), -2);
        assert_eq!(network.arc_cost(2), 3);
        assert_eq!(network.arc_cost(3), -3);
    }

    #[test]
    fn excess_and_deficit_nodes() {
        let network = chain();

        assert!(network.is_excess_node(0));
        assert!(!network.is_excess_node(1));
        assert!(!network.is_deficit_node(1));
        assert!(network.is_deficit_node(2));

        assert_eq!(network.excess_nodes().collect::<Vec<_>>(), vec![0]);
        assert_eq!(network.deficit_nodes().collect::<Vec<_>>(), vec![2]);
        assert_eq!(network.total_excess(), 1);
        assert_eq!(network.total_deficit(), -1);
        assert!(network.is_balanced());
    }

    #[test]
    fn balance_matches_excess_plus_deficit() {
        let residual_graph = ResidualGraph::from_edges(3, &[(0, 1), (1, 2)]);
        let network: UnitCapacityNetwork<i64, i64> =
            Network::new(residual_graph, vec![2, 0, -1], &[1, 1]);

        assert_eq!(network.total_excess() + network.total_deficit(), 1);
        assert!(!network.is_balanced());
    }

    #[test]
    fn excess_updates() {
        let mut network = chain();
        network.decrease_node_excess(0, 1);
        network.increase_node_excess(2, 1);
        assert_eq!(network.node_excess(0), 0);
        assert_eq!(network.node_excess(2), 0);
        assert_eq!(network.excess_nodes().count(), 0);
        assert_eq!(network.deficit_nodes().count(), 0);
        assert!(network.is_balanced());
    }

    #[test]
    fn reduced_cost_follows_potentials() {
        let residual_graph = ResidualGraph::from_edges(2, &[(0, 1)]);
        let mut network: UncapacitatedNetwork<i64, i64> =
            Network::new(residual_graph, vec![0, 0], &[5]);

        network.increase_node_potential(0, 3);
        network.increase_node_potential(1, 1);
        assert_eq!(network.node_potential(0), 3);
        assert_eq!(network.arc_reduced_cost(0, 0, 1), 5 - 3 + 1);

        network.increase_node_potential(0, 1);
        assert_eq!(network.arc_reduced_cost(0, 0, 1), 2);

        network.decrease_node_potential(1, 1);
        assert_eq!(network.arc_reduced_cost(0, 0, 1), 1);

        // The reverse arc's reduced cost is the exact negation.
        assert_eq!(network.arc_reduced_cost(1, 1, 0), -1);
    }

    #[test]
    fn total_cost_sums_forward_flow() {
        let mut network = chain();
        assert_eq!(network.total_cost(), 0);

        network.increase_arc_flow(0, 1);
        network.increase_arc_flow(2, 1);
        assert_eq!(network.total_cost(), 2 + 3);

        // Retracting flow along a reverse arc removes its cost again.
        network.increase_arc_flow(3, 1);
        assert_eq!(network.total_cost(), 2);
    }

    #[test]
    fn works_with_float_costs() {
        let residual_graph = ResidualGraph::from_edges(2, &[(0, 1)]);
        let network: UncapacitatedNetwork<i64, f64> =
            Network::new(residual_graph, vec![0, 0], &[2.5]);
        assert_eq!(network.arc_cost(1), -2.5);
        assert_eq!(network.total_cost(), 0.0);
    }

    #[test]
    #[should_panic(expected = "surplus length")]
    fn rejects_surplus_length_mismatch() {
        let residual_graph = ResidualGraph::from_edges(2, &[(0, 1)]);
        let _network: UnitCapacityNetwork<i64, i64> =
            Network::new(residual_graph, vec![0], &[1]);
    }

    #[test]
    #[should_panic(expected = "cost length")]
    fn rejects_cost_length_mismatch() {
        let residual_graph = ResidualGraph::from_edges(2, &[(0, 1)]);
        let _network: UnitCapacityNetwork<i64, i64> =
            Network::new(residual_graph, vec![0, 0], &[1, 1]);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn rejects_negative_forward_costs() {
        let residual_graph = ResidualGraph::from_edges(2, &[(0, 1)]);
        let _network: UnitCapacityNetwork<i64, i64> =
            Network::new(residual_graph, vec![0, 0], &[-1]);
    }

    #[test]
    #[should_panic(expected = "finite")]
    fn rejects_infinite_forward_costs() {
        let residual_graph = ResidualGraph::from_edges(2, &[(0, 1)]);
        let _network: UncapacitatedNetwork<i64, f64> =
            Network::new(residual_graph, vec![0, 0], &[f64::INFINITY]);
    }
}
