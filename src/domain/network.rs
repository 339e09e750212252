use crate::domain::error::RouteError;
use crate::domain::graph::Graph;
use std::collections::HashMap;

/// Airports and the directed routes between them.
///
/// Holds the bijection between airport codes and dense vertex ids, plus the
/// adjacency list over those ids. Built once per query and never shared.
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    airports: HashMap<String, usize>,
    labels: Vec<Option<String>>,
    graph: Graph,
}

impl RouteNetwork {
    /// Uses the caller's code→id map as-is; the vertex count is the number of codes.
    ///
    /// When several codes share an id, the smallest code names it.
    pub fn new(airports: HashMap<String, usize>) -> Self {
        let n = airports.len();
        let mut labels: Vec<Option<String>> = vec![None; n];
        let mut codes: Vec<(&String, usize)> = airports.iter().map(|(c, &id)| (c, id)).collect();
        codes.sort();
        for (code, id) in codes {
            match labels.get_mut(id) {
                Some(slot) if slot.is_none() => *slot = Some(code.clone()),
                _ => {}
            }
        }
        Self {
            airports,
            labels,
            graph: Graph::new(n),
        }
    }

    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut network = Self::default();
        for code in codes {
            network.register(code);
        }
        network
    }

    /// Returns the id of `code`, assigning the next dense id if it is new.
    pub fn register(&mut self, code: impl Into<String>) -> usize {
        let code = code.into();
        if let Some(&id) = self.airports.get(&code) {
            return id;
        }
        let id = self.graph.add_vertex();
        if self.labels.len() <= id {
            self.labels.resize(id + 1, None);
        }
        self.labels[id] = Some(code.clone());
        self.airports.insert(code, id);
        id
    }

    pub fn vertex(&self, code: &str) -> Result<usize, RouteError> {
        self.airports
            .get(code)
            .copied()
            .ok_or_else(|| RouteError::UnknownLabel(code.to_string()))
    }

    pub fn label(&self, vertex: usize) -> Option<&str> {
        self.labels.get(vertex).and_then(|l| l.as_deref())
    }

    pub fn airport_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn route_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.graph.add_edge(from, to);
    }

    pub fn add_route(&mut self, from: &str, to: &str) -> Result<(), RouteError> {
        let (u, v) = (self.vertex(from)?, self.vertex(to)?);
        self.add_edge(u, v);
        Ok(())
    }

    /// Adds every route or none of them.
    pub fn add_routes<'a, I>(&mut self, routes: I) -> Result<(), RouteError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let resolved = routes
            .into_iter()
            .map(|(from, to)| -> Result<(usize, usize), RouteError> {
                Ok((self.vertex(from)?, self.vertex(to)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (u, v) in resolved {
            self.add_edge(u, v);
        }
        Ok(())
    }
}
