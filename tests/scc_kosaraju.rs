use route_connectivity::domain::error::RouteError;
use route_connectivity::domain::graph::Graph;
use route_connectivity::domain::traits::SccDetector;
use route_connectivity::infrastructure::scc_kosaraju::KosarajuSccDetector;

#[test]
fn kosaraju_detects_self_loop_as_cyclic() {
    // 0 -> 0
    let mut g = Graph::new(1);
    g.add_edge(0, 0);

    let det = KosarajuSccDetector;
    let scc = det.compute_scc(&g).expect("scc");

    assert_eq!(scc.components.len(), 1);
    assert_eq!(scc.components[0], vec![0]);
    assert_eq!(scc.cyclic_component, vec![true]);
}

#[test]
fn kosaraju_detects_two_node_cycle() {
    // 0 <-> 1
    let mut g = Graph::new(2);
    g.add_edge(0, 1);
    g.add_edge(1, 0);

    let det = KosarajuSccDetector;
    let scc = det.compute_scc(&g).expect("scc");

    assert_eq!(scc.components.len(), 1);
    assert_eq!(scc.components[0], vec![0, 1]);
    assert_eq!(scc.cyclic_component, vec![true]);
}

#[test]
fn kosaraju_splits_chain_into_singletons_in_topological_order() {
    // 0 -> 1 -> 2
    let mut g = Graph::new(3);
    g.add_edge(0, 1);
    g.add_edge(1, 2);

    let det = KosarajuSccDetector;
    let scc = det.compute_scc(&g).expect("scc");

    assert_eq!(scc.components, vec![vec![0], vec![1], vec![2]]);
    assert!(scc.cyclic_component.iter().all(|&b| !b));
}

#[test]
fn kosaraju_isolated_vertices_are_singletons() {
    let g = Graph::new(3);

    let scc = KosarajuSccDetector.compute_scc(&g).expect("scc");

    // Pass 1 finishes 0, 1, 2 in order, so 2 is popped first.
    assert_eq!(scc.components, vec![vec![2], vec![1], vec![0]]);
    assert_eq!(scc.component_of, vec![2, 1, 0]);
}

#[test]
fn kosaraju_rejects_out_of_range_reference() {
    let mut g = Graph::new(2);
    g.add_edge(0, 1);
    g.add_edge(1, 2);

    let err = KosarajuSccDetector.compute_scc(&g).unwrap_err();
    assert_eq!(
        err,
        RouteError::OutOfRange {
            vertex: 2,
            vertex_count: 2
        }
    );
}

#[test]
fn kosaraju_handles_long_chain_without_recursion() {
    let n = 200_000;
    let mut g = Graph::new(n);
    for v in 0..n - 1 {
        g.add_edge(v, v + 1);
    }

    let scc = KosarajuSccDetector.compute_scc(&g).expect("scc");
    assert_eq!(scc.components.len(), n);
    assert_eq!(scc.components[0], vec![0]);
    assert_eq!(scc.components[n - 1], vec![n - 1]);
}

#[test]
fn kosaraju_handles_long_cycle_without_recursion() {
    let n = 200_000;
    let mut g = Graph::new(n);
    for v in 0..n {
        g.add_edge(v, (v + 1) % n);
    }

    let scc = KosarajuSccDetector.compute_scc(&g).expect("scc");
    assert_eq!(scc.components.len(), 1);
    assert_eq!(scc.components[0].len(), n);
}
