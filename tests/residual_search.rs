//! Drives Dial's algorithm over a flow network's residual graph the way an
//! augmenting-path solver would: pop, visit, relax every admissible outgoing
//! arc with its reduced cost, then push flow along the predecessor path.

use residual_flow::graph::dial::{max_admissible_arc_length, Dial};
use residual_flow::network::capacity::CapacityMixin;
use residual_flow::network::network::{Network, UnitCapacityNetwork};
use residual_flow::network::residual_graph::ResidualGraph;

type Flow = i64;
type Cost = i64;

// A diamond with a cheap lower path: 0 -> 1 -> 3 costs 4, 0 -> 2 -> 3
// costs 3. One unit of supply at node 0, one unit of demand at node 3.
const EDGES: [(usize, usize); 4] = [(0, 1), (0, 2), (1, 3), (2, 3)];
const COSTS: [Cost; 4] = [1, 2, 3, 1];

fn diamond_network() -> UnitCapacityNetwork<Flow, Cost> {
    let residual_graph = ResidualGraph::from_edges(4, &EDGES);
    Network::new(residual_graph, vec![1, 0, 0, -1], &COSTS)
}

// Runs one shortest-path search from `source`, asserting that vertices are
// popped in non-decreasing distance order.
fn search<C: CapacityMixin<Flow>>(
    dial: &mut Dial<'_, ResidualGraph, Cost>,
    network: &Network<Flow, Cost, C>,
    source: usize,
) {
    dial.add_source(source);

    let mut previous_distance = 0;
    while !dial.done() {
        let (tail, distance) = dial.pop_next_unvisited_vertex();
        assert!(distance >= previous_distance);
        previous_distance = distance;

        dial.visit_vertex(tail, distance);

        for (arc, head) in network.outgoing_arcs(tail) {
            if network.is_arc_saturated(arc) {
                continue;
            }
            let arc_length = network.arc_reduced_cost(arc, tail, head);
            assert!(arc_length >= 0);
            dial.relax_edge(arc, tail, head, distance + arc_length);
        }
    }
}

#[test]
fn search_finds_the_cheapest_path() {
    let network = diamond_network();
    let mut dial = Dial::from_network(&network);

    // Longest admissible reduced cost is 3, so four buckets suffice.
    assert_eq!(dial.num_buckets(), 4);

    search(&mut dial, &network, 0);

    assert_eq!(dial.distance_to_vertex(0), 0);
    assert_eq!(dial.distance_to_vertex(1), 1);
    assert_eq!(dial.distance_to_vertex(2), 2);
    assert_eq!(dial.distance_to_vertex(3), 3);

    // The cheap path 0 -> 2 -> 3 wins over 0 -> 1 -> 3.
    assert!(dial.is_root_vertex(0));
    assert_eq!(dial.predecessor(3), (2, network.residual_graph().get_residual_arc_id(3)));
    assert_eq!(dial.predecessor(2), (0, network.residual_graph().get_residual_arc_id(1)));
    assert_eq!(dial.visited_vertices().count(), 4);
}

#[test]
fn augmenting_along_the_tree_moves_the_unit() {
    let mut network = diamond_network();
    let sink = 3;

    let mut dial = Dial::from_network(&network);
    search(&mut dial, &network, 0);
    assert!(dial.has_visited_vertex(sink));

    // Push the unit along the predecessor path from the sink to the root.
    let path: Vec<(usize, usize)> = dial.predecessors(sink).collect();
    assert_eq!(path.len(), 2);
    for &(_, arc) in &path {
        assert!(!network.is_arc_saturated(arc));
        network.increase_arc_flow(arc, 1);
    }
    network.decrease_node_excess(0, 1);
    network.increase_node_excess(sink, 1);

    assert!(network.is_balanced());
    assert_eq!(network.excess_nodes().count(), 0);
    assert_eq!(network.deficit_nodes().count(), 0);
    assert_eq!(network.total_cost(), 3);

    // The used arcs are now saturated and their transposes admissible.
    for &(_, arc) in &path {
        assert!(network.is_arc_saturated(arc));
        assert!(!network.is_arc_saturated(network.get_transpose_arc_id(arc)));
    }
}

#[test]
fn potentials_keep_reduced_costs_non_negative_across_searches() {
    let mut network = diamond_network();

    let mut dial = Dial::from_network(&network);
    search(&mut dial, &network, 0);
    let distances: Vec<Cost> =
        (0..network.num_nodes()).map(|node| dial.distance_to_vertex(node)).collect();
    let path: Vec<(usize, usize)> = dial.predecessors(3).collect();

    // Standard successive-shortest-paths potential update: subtract each
    // visited node's distance.
    for node in 0..network.num_nodes() {
        network.decrease_node_potential(node, distances[node]);
    }

    // Augment along the tree path.
    for &(_, arc) in &path {
        network.increase_arc_flow(arc, 1);
    }
    network.decrease_node_excess(0, 1);
    network.increase_node_excess(3, 1);

    // Every unsaturated arc must still be admissible, so a second search
    // can be seeded directly from the updated network.
    let max_arc_length = max_admissible_arc_length(&network);
    assert!(max_arc_length >= 0);

    let mut second = Dial::from_network(&network);
    assert_eq!(second.num_buckets() as i64, max_arc_length + 1);
    search(&mut second, &network, 0);
    assert!(second.has_visited_vertex(0));
}
