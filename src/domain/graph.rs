use crate::domain::error::RouteError;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Directed adjacency list over dense vertex ids `0..vertex_count`.
///
/// Neighbor order is insertion order. Edges whose source lies outside the
/// vertex range are kept aside in `stray` instead of growing the row table;
/// `check_bounds` reports them.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub edges: Vec<Vec<usize>>,
    stray: Vec<(usize, usize)>,
    vertex_count: usize,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); vertex_count],
            stray: Vec::new(),
            vertex_count,
        }
    }

    pub fn node_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum::<usize>() + self.stray.len()
    }

    /// Grows the vertex range by one and returns the new id.
    pub fn add_vertex(&mut self) -> usize {
        let id = self.vertex_count;
        self.vertex_count += 1;
        self.edges.push(Vec::new());
        id
    }

    /// Appends `to` to the neighbor list of `from`.
    ///
    /// Ids are not range checked here; `check_bounds` reports bad references.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        match self.edges.get_mut(from) {
            Some(outs) => outs.push(to),
            None => self.stray.push((from, to)),
        }
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.edges.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every `(from, to)` pair in adjacency order, stray pairs last.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .flat_map(|(u, outs)| outs.iter().map(move |&v| (u, v)))
            .chain(self.stray.iter().copied())
    }

    pub fn check_bounds(&self) -> Result<(), RouteError> {
        let n = self.vertex_count;
        for (u, v) in self.edge_pairs() {
            let bad = if u >= n { u } else { v };
            if bad >= n {
                return Err(RouteError::OutOfRange {
                    vertex: bad,
                    vertex_count: n,
                });
            }
        }
        Ok(())
    }

    /// Builds a new graph with every edge reversed. `self` is left untouched.
    pub fn transpose(&self) -> Graph {
        let mut rev = Graph::new(self.vertex_count);
        for (u, v) in self.edge_pairs() {
            rev.add_edge(v, u);
        }
        rev
    }
}

#[derive(Debug, Clone)]
pub struct SccResult {
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Index of the first component listing `vertex` as a member.
    pub fn component_containing(&self, vertex: usize) -> Option<usize> {
        self.components.iter().position(|comp| comp.contains(&vertex))
    }
}

/// Graph over component indices. Components without outgoing cross edges are
/// absent from `edges`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CondensedGraph {
    pub component_count: usize,
    pub edges: BTreeMap<usize, BTreeSet<usize>>,
}

impl CondensedGraph {
    pub fn new(component_count: usize) -> Self {
        Self {
            component_count,
            edges: BTreeMap::new(),
        }
    }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.edges.entry(from).or_default().insert(to);
    }

    pub fn successors(&self, c: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges.get(&c).into_iter().flatten().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Targets outside `0..component_count` are not counted; debug builds assert on them.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut in_degree = vec![0; self.component_count];
        for outs in self.edges.values() {
            for &v in outs {
                debug_assert!(
                    v < self.component_count,
                    "condensed edge to unknown component {v}"
                );
                if let Some(d) = in_degree.get_mut(v) {
                    *d += 1;
                }
            }
        }
        in_degree
    }

    /// Kahn's algorithm: acyclic iff every component can be peeled off.
    pub fn is_acyclic(&self) -> bool {
        let mut in_degree = self.in_degrees();
        let mut ready: VecDeque<usize> = (0..self.component_count)
            .filter(|&c| in_degree[c] == 0)
            .collect();
        let mut removed = 0usize;

        while let Some(c) = ready.pop_front() {
            removed += 1;
            for next in self.successors(c) {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.push_back(next);
                }
            }
        }

        removed == self.component_count
    }
}
