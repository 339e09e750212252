use crate::domain::error::RouteError;
use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &Graph) -> Result<SccResult, RouteError> {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &Graph) -> Result<SccResult, RouteError> {
    graph.check_bounds()?;
    let n = graph.node_count();

    // Pass 1: finish order, last-finished on top.
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut seen = vec![false; n];

    for start in 0..n {
        if seen[start] {
            continue;
        }
        iterative_finish_order(start, graph, &mut seen, &mut order);
    }

    let rev = graph.transpose();

    // Pass 2: one DFS over the transpose per component, roots in decreasing finish time.
    let mut component_of = vec![usize::MAX; n];
    let mut components: Vec<Vec<usize>> = Vec::new();

    while let Some(v) = order.pop() {
        if component_of[v] != usize::MAX {
            continue;
        }
        let comp = iterative_collect(v, &rev, components.len(), &mut component_of);
        components.push(comp);
    }

    let mut cyclic_component = vec![false; components.len()];

    for (cid, comp) in components.iter().enumerate() {
        if comp.len() > 1 {
            cyclic_component[cid] = true;
            continue;
        }
        let only = comp[0];
        if graph.neighbors(only).contains(&only) {
            cyclic_component[cid] = true;
        }
    }

    Ok(SccResult {
        component_of,
        components,
        cyclic_component,
    })
}

fn iterative_finish_order(start: usize, graph: &Graph, seen: &mut [bool], order: &mut Vec<usize>) {
    let mut stack: Vec<(usize, usize)> = Vec::new();
    stack.push((start, 0));

    while let Some((v, next_i)) = stack.pop() {
        seen[v] = true;

        let outs = graph.neighbors(v);
        if next_i < outs.len() {
            let to = outs[next_i];
            stack.push((v, next_i + 1));
            if !seen[to] {
                stack.push((to, 0));
            }
            continue;
        }

        order.push(v);
    }
}

/// Collects members in the order a recursive DFS would first reach them.
fn iterative_collect(
    root: usize,
    rev: &Graph,
    cid: usize,
    component_of: &mut [usize],
) -> Vec<usize> {
    let mut comp = vec![root];
    component_of[root] = cid;

    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

    while let Some((v, next_i)) = stack.pop() {
        let outs = rev.neighbors(v);
        if next_i >= outs.len() {
            continue;
        }
        let p = outs[next_i];
        stack.push((v, next_i + 1));
        if component_of[p] == usize::MAX {
            component_of[p] = cid;
            comp.push(p);
            stack.push((p, 0));
        }
    }

    comp
}
