use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::CoordGraph;

pub mod csr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target<EV> {
    target: usize,
    value: EV,
}

impl<EV> Target<EV> {
    pub fn new(target: usize, value: EV) -> Target<EV> {
        Self { target, value }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn value(&self) -> &EV {
        &self.value
    }
}

impl<EV> Hash for Target<EV> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.target.hash(state)
    }
}

impl<EV> PartialEq for Target<EV> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<EV> Eq for Target<EV> {}

/// Node ids from start to goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<usize>,
}

impl Path {
    pub fn new(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    /// Walks `parents` back from `goal` until a node without parent is
    /// reached and returns the reversed trail.
    pub(crate) fn from_parents(parents: &FxHashMap<usize, usize>, goal: usize) -> Self {
        let mut nodes = vec![goal];
        let mut node = goal;

        while let Some(&parent) = parents.get(&node) {
            nodes.push(parent);
            node = parent;
        }

        nodes.reverse();
        Self { nodes }
    }

    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    pub fn goal(&self) -> Option<usize> {
        self.nodes.last().copied()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn names<'a, G: CoordGraph>(&self, graph: &'a G) -> Vec<&'a str> {
        self.nodes
            .iter()
            .filter_map(|node| graph.node_name(*node))
            .collect()
    }
}
