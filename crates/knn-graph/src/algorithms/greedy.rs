use std::cmp::Reverse;

use log::{debug, trace};
use priority_queue::PriorityQueue;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use tracing::instrument;

use crate::{
    CoordGraph,
    algorithms::{
        FrontierKey,
        heuristic::{GreatCircle, Heuristic},
    },
    graph::Path,
};

pub trait GreedyBestFirstSearch: CoordGraph {
    /// Always expands the frontier node closest to `goal` by great-circle
    /// distance, ignoring the cost accumulated so far.
    ///
    /// Ties are broken by node name. A node keeps the parent that
    /// discovered it first.
    fn greedy_best_first(&self, start: usize, goal: usize) -> Option<Path>;
}

impl<G: CoordGraph> GreedyBestFirstSearch for G {
    #[instrument(level = "debug", skip(self))]
    fn greedy_best_first(&self, start: usize, goal: usize) -> Option<Path> {
        let (Some(start_value), Some(goal_value)) = (self.node_value(start), self.node_value(goal))
        else {
            debug!("start {start} or goal {goal} not in graph");
            return None;
        };
        let (goal_lat, goal_lon) = goal_value.lat_lon();

        let mut frontier = PriorityQueue::with_hasher(FxBuildHasher);
        let mut visited = FxHashSet::default();
        let mut parents = FxHashMap::default();

        frontier.push(
            start,
            Reverse(FrontierKey::new(
                GreatCircle.estimate(start_value.latitude, start_value.longitude, goal_lat, goal_lon),
                start_value.name.as_str(),
            )),
        );

        while let Some((node, Reverse(key))) = frontier.pop() {
            if node == goal {
                debug!("reached goal after expanding {} nodes", visited.len());
                return Some(Path::from_parents(&parents, goal));
            }

            visited.insert(node);
            trace!("expanding node {node} (estimate {})", key.priority);

            for neighbor in self.neighbors(node) {
                let n = neighbor.target();
                if visited.contains(&n) || frontier.get(&n).is_some() {
                    continue;
                }
                let Some(value) = self.node_value(n) else {
                    continue;
                };

                let estimate = GreatCircle.estimate(value.latitude, value.longitude, goal_lat, goal_lon);
                parents.insert(n, node);
                frontier.push(n, Reverse(FrontierKey::new(estimate, value.name.as_str())));
            }
        }

        debug!(
            "frontier exhausted after expanding {} nodes, goal {goal} unreachable",
            visited.len()
        );
        None
    }
}
