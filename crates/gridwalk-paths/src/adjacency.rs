use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::{Graph, WeightedGraph};

/// Arbitrary directed graph stored as ordered adjacency lists.
///
/// Nodes without an entry have no neighbors. Every edge has unit cost.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    edges: HashMap<N, Vec<N>>,
}

impl<N> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full neighbor list of `node`, replacing any previous one.
    pub fn insert(&mut self, node: N, neighbors: Vec<N>) {
        self.edges.insert(node, neighbors);
    }

    /// Append a directed edge `from -> to`.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.edges.entry(from).or_default().push(to);
    }

    /// Neighbor list of `node` in insertion order.
    pub fn edges(&self, node: &N) -> &[N] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes that have an adjacency entry (in arbitrary order).
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges.keys()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<N: Clone + Eq + Hash> FromIterator<(N, Vec<N>)> for AdjacencyGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<N: Clone + Eq + Hash> Graph for AdjacencyGraph<N> {
    type Node = N;

    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        buf.extend_from_slice(self.edges(node));
    }
}

impl<N: Clone + Eq + Hash> WeightedGraph for AdjacencyGraph<N> {}
