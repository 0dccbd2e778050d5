use std::collections::VecDeque;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::instrument;

use crate::{Graph, graph::Path};

pub trait BreadthFirstSearch: Graph {
    /// Unweighted breadth-first search from `start` to `goal`.
    ///
    /// Nodes are marked visited when they are dequeued, not when they are
    /// discovered, so a node may sit in the queue several times. The path
    /// returned is the one along which the goal was discovered first; edge
    /// weights are ignored, so it is not necessarily the shortest by distance.
    fn bfs(&self, start: usize, goal: usize) -> Option<Path>;
}

impl<G: Graph> BreadthFirstSearch for G {
    #[instrument(level = "debug", skip(self))]
    fn bfs(&self, start: usize, goal: usize) -> Option<Path> {
        if !self.contains_node(start) || !self.contains_node(goal) {
            debug!("start {start} or goal {goal} not in graph");
            return None;
        }

        let mut frontier = VecDeque::from([start]);
        let mut visited = FxHashSet::default();
        let mut parents = FxHashMap::default();

        while let Some(node) = frontier.pop_front() {
            if !visited.insert(node) {
                continue;
            }

            if node == goal {
                debug!("reached goal after expanding {} nodes", visited.len());
                return Some(Path::from_parents(&parents, goal));
            }

            trace!("expanding node {node}");

            for neighbor in self.neighbors(node) {
                let n = neighbor.target();
                if visited.contains(&n) {
                    continue;
                }

                // The first queued copy of a node is the first one dequeued.
                parents.entry(n).or_insert(node);
                frontier.push_back(n);
            }
        }

        debug!(
            "frontier exhausted after expanding {} nodes, goal {goal} unreachable",
            visited.len()
        );
        None
    }
}
