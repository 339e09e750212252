use crate::domain::graph::{CondensedGraph, Graph, SccResult};

/// Collapses each component of `scc` to one node and keeps only edges between
/// distinct components. Parallel cross edges collapse into one.
pub fn build_condensed_graph(graph: &Graph, scc: &SccResult) -> CondensedGraph {
    let mut component_of = vec![usize::MAX; graph.node_count()];
    for (idx, comp) in scc.components.iter().enumerate() {
        for &v in comp {
            component_of[v] = idx;
        }
    }

    let mut condensed = CondensedGraph::new(scc.components.len());

    for (u, v) in graph.edge_pairs() {
        let (cu, cv) = (component_of[u], component_of[v]);
        if cu != cv {
            condensed.add_edge(cu, cv);
        }
    }

    condensed
}
