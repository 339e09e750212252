use crate::domain::graph::CondensedGraph;

/// Components other than `start_component` that no cross edge enters.
///
/// The start component is skipped by identity, whatever its in-degree. Each
/// returned component needs exactly one new route, so the length of the result
/// is the answer.
pub fn orphan_components(condensed: &CondensedGraph, start_component: usize) -> Vec<usize> {
    let in_degree = condensed.in_degrees();

    (0..condensed.component_count)
        .filter(|&c| c != start_component && in_degree[c] == 0)
        .collect()
}

pub fn count_routes_needed(condensed: &CondensedGraph, start_component: usize) -> usize {
    orphan_components(condensed, start_component).len()
}
