//! Property-based tests for SCC decomposition, condensation and the route count.
//!
//! Uses proptest to verify invariants across randomly generated graphs.

use proptest::prelude::*;
use route_connectivity::domain::graph::Graph;
use route_connectivity::domain::network::RouteNetwork;
use route_connectivity::domain::traits::SccDetector;
use route_connectivity::infrastructure::scc_kosaraju::KosarajuSccDetector;
use route_connectivity::usecase::connectivity::{
    build_condensed_graph, find_minimum_additional_routes,
};

/// Strategy to generate a vertex count and an edge list over it.
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..14).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..40)))
}

fn build_graph(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::new(n);
    for &(u, v) in edges {
        g.add_edge(u, v);
    }
    g
}

fn build_network(n: usize, edges: &[(usize, usize)]) -> RouteNetwork {
    let mut net = RouteNetwork::from_codes((0..n).map(|i| format!("V{i}")));
    for &(u, v) in edges {
        net.add_edge(u, v);
    }
    net
}

/// reach[u][v] is true when v is reachable from u (including u itself).
fn reachability(g: &Graph) -> Vec<Vec<bool>> {
    let n = g.node_count();
    (0..n)
        .map(|src| {
            let mut seen = vec![false; n];
            let mut stack = vec![src];
            seen[src] = true;
            while let Some(v) = stack.pop() {
                for &w in g.neighbors(v) {
                    if !seen[w] {
                        seen[w] = true;
                        stack.push(w);
                    }
                }
            }
            seen
        })
        .collect()
}

proptest! {
    /// Every vertex lands in exactly one component.
    #[test]
    fn components_partition_vertices((n, edges) in graph_strategy()) {
        let g = build_graph(n, &edges);
        let scc = KosarajuSccDetector.compute_scc(&g).unwrap();

        let mut count = vec![0usize; n];
        for comp in &scc.components {
            prop_assert!(!comp.is_empty());
            for &v in comp {
                count[v] += 1;
            }
        }
        prop_assert!(count.iter().all(|&c| c == 1));

        for (cid, comp) in scc.components.iter().enumerate() {
            for &v in comp {
                prop_assert_eq!(scc.component_of[v], cid);
            }
        }
    }

    /// Same component iff mutually reachable.
    #[test]
    fn components_match_mutual_reachability((n, edges) in graph_strategy()) {
        let g = build_graph(n, &edges);
        let scc = KosarajuSccDetector.compute_scc(&g).unwrap();
        let reach = reachability(&g);

        for u in 0..n {
            for v in 0..n {
                let same = scc.component_of[u] == scc.component_of[v];
                prop_assert_eq!(same, reach[u][v] && reach[v][u]);
            }
        }
    }

    /// The condensation never contains a cycle or a self-loop.
    #[test]
    fn condensed_graph_is_acyclic((n, edges) in graph_strategy()) {
        let g = build_graph(n, &edges);
        let scc = KosarajuSccDetector.compute_scc(&g).unwrap();
        let condensed = build_condensed_graph(&g, &scc);

        prop_assert_eq!(condensed.component_count, scc.components.len());
        prop_assert!(condensed.is_acyclic());
        for (c, outs) in &condensed.edges {
            prop_assert!(!outs.contains(c));
        }
    }

    /// Repeated queries and doubled edges give the same answer.
    #[test]
    fn answer_is_deterministic_and_ignores_duplicate_edges(
        (n, edges) in graph_strategy(),
        start in 0usize..14,
    ) {
        let start = format!("V{}", start % n);
        let net = build_network(n, &edges);
        let first = find_minimum_additional_routes(&net, &start, &KosarajuSccDetector).unwrap();
        let again = find_minimum_additional_routes(&net, &start, &KosarajuSccDetector).unwrap();
        prop_assert_eq!(first, again);

        let doubled: Vec<(usize, usize)> = edges.iter().chain(edges.iter()).copied().collect();
        let net2 = build_network(n, &doubled);
        let second = find_minimum_additional_routes(&net2, &start, &KosarajuSccDetector).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The answer never exceeds the number of other components.
    #[test]
    fn answer_is_bounded_by_component_count(
        (n, edges) in graph_strategy(),
        start in 0usize..14,
    ) {
        let start = format!("V{}", start % n);
        let net = build_network(n, &edges);
        let scc = KosarajuSccDetector.compute_scc(net.graph()).unwrap();
        let answer = find_minimum_additional_routes(&net, &start, &KosarajuSccDetector).unwrap();
        prop_assert!(answer < scc.components.len());
    }
}
