use std::{cmp::Reverse, collections::BinaryHeap};

use log::{debug, trace};
use ordered_float::OrderedFloat;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::instrument;

use crate::{
    CoordGraph,
    algorithms::{FrontierKey, heuristic::Heuristic},
    graph::Path,
};

/// Queue entry. Ordered by `f = g + h`, then node name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate<'a> {
    key: FrontierKey<'a>,
    node: usize,
    cost: OrderedFloat<f64>,
}

pub trait AStarSearch: CoordGraph {
    /// A* from `start` to `goal`, guided by `heuristic`.
    ///
    /// The queue may hold several entries for one node; an entry whose cost
    /// is above the best known cost of its node is skipped when popped.
    /// Returns a cheapest path if `heuristic` never overestimates.
    fn a_star<H: Heuristic>(&self, start: usize, goal: usize, heuristic: &H) -> Option<Path>;
}

impl<G: CoordGraph> AStarSearch for G {
    #[instrument(level = "debug", skip(self, heuristic))]
    fn a_star<H: Heuristic>(&self, start: usize, goal: usize, heuristic: &H) -> Option<Path> {
        let (Some(start_value), Some(goal_value)) = (self.node_value(start), self.node_value(goal))
        else {
            debug!("start {start} or goal {goal} not in graph");
            return None;
        };
        let (goal_lat, goal_lon) = goal_value.lat_lon();

        let mut frontier = BinaryHeap::new();
        let mut visited = FxHashSet::default();
        let mut best_cost: FxHashMap<usize, f64> = FxHashMap::default();
        let mut parents = FxHashMap::default();

        best_cost.insert(start, 0.0);
        frontier.push(Reverse(Candidate {
            key: FrontierKey::new(
                heuristic.estimate(start_value.latitude, start_value.longitude, goal_lat, goal_lon),
                start_value.name.as_str(),
            ),
            node: start,
            cost: OrderedFloat(0.0),
        }));

        while let Some(Reverse(Candidate { key, node, cost })) = frontier.pop() {
            if visited.contains(&node) || best_cost.get(&node).is_some_and(|best| *cost > *best) {
                trace!("skipping stale entry for node {node}");
                continue;
            }

            if node == goal {
                debug!(
                    "reached goal with cost {} after expanding {} nodes",
                    cost,
                    visited.len()
                );
                return Some(Path::from_parents(&parents, goal));
            }

            visited.insert(node);
            trace!("expanding node {node} (f = {}, g = {})", key.priority, cost);

            for neighbor in self.neighbors(node) {
                let n = neighbor.target();
                if visited.contains(&n) {
                    continue;
                }
                let Some(value) = self.node_value(n) else {
                    continue;
                };

                let tentative = *cost + *neighbor.value();
                if best_cost.get(&n).is_some_and(|best| tentative >= *best) {
                    continue;
                }

                best_cost.insert(n, tentative);
                parents.insert(n, node);

                let estimate = heuristic.estimate(value.latitude, value.longitude, goal_lat, goal_lon);
                frontier.push(Reverse(Candidate {
                    key: FrontierKey::new(tentative + estimate, value.name.as_str()),
                    node: n,
                    cost: OrderedFloat(tentative),
                }));
            }
        }

        debug!(
            "frontier exhausted after expanding {} nodes, goal {goal} unreachable",
            visited.len()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::AStarSearch;
    use crate::{
        CoordGraph, Coordinate, Graph, KnnGraph,
        algorithms::{
            cost::path_cost,
            fixtures::{isolated, line, random},
            heuristic::{FlatPlane, GreatCircle},
        },
        distance::great_circle,
    };

    /// Cheapest path costs by exhaustive relaxation, for comparison.
    fn bellman_ford(graph: &KnnGraph, start: usize) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; graph.node_count()];
        dist[start] = 0.0;

        for _ in 0..graph.node_count() {
            for (node, _) in graph.nodes_iter() {
                for t in graph.neighbors(node) {
                    if dist[node] + t.value() < dist[t.target()] {
                        dist[t.target()] = dist[node] + t.value();
                    }
                }
            }
        }

        dist
    }

    #[test]
    fn line_takes_direct_edge() {
        let graph = line();
        let (p, r) = (graph.node_id("P").unwrap(), graph.node_id("R").unwrap());

        let path = graph.a_star(p, r, &GreatCircle).unwrap();

        assert_eq!(path.names(&graph), vec!["P", "R"]);
        assert_relative_eq!(
            path_cost(&graph, Some(&path)).unwrap(),
            great_circle((0.0, 0.0), (0.0, 2.0))
        );
    }

    #[test]
    fn finds_cheapest_path() {
        let graph = random(120, 4, 77);
        let dist = bellman_ford(&graph, 0);

        for goal in 1..graph.node_count() {
            let path = graph.a_star(0, goal, &GreatCircle);

            if dist[goal].is_infinite() {
                assert_eq!(path, None);
                continue;
            }

            let cost = path_cost(&graph, path.as_ref()).unwrap();
            assert_relative_eq!(cost, dist[goal], max_relative = 1e-9);
        }
    }

    #[test]
    fn zero_heuristic_is_dijkstra() {
        let graph = random(80, 3, 4);
        let dist = bellman_ford(&graph, 5);
        let zero = |_: f64, _: f64, _: f64, _: f64| 0.0;

        for goal in 0..graph.node_count() {
            let cost = path_cost(&graph, graph.a_star(5, goal, &zero).as_ref()).unwrap();
            if dist[goal].is_infinite() {
                assert!(cost.is_infinite());
            } else {
                assert_relative_eq!(cost, dist[goal], max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn flat_plane_matches_great_circle_near_equator() {
        let graph = random(100, 5, 13);

        for goal in [20, 50, 99] {
            let exact = graph.a_star(0, goal, &GreatCircle);
            let approx = graph.a_star(0, goal, &FlatPlane);

            assert_eq!(exact.is_some(), approx.is_some());
            assert_relative_eq!(
                path_cost(&graph, exact.as_ref()).unwrap(),
                path_cost(&graph, approx.as_ref()).unwrap(),
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn improves_queued_node() {
        // C is first queued via the expensive direct edge, then improved via B.
        let graph = KnnGraph::from_edges(
            vec![
                Coordinate::new("A", 0.0, 0.0),
                Coordinate::new("B", 0.0, 0.1),
                Coordinate::new("C", 0.0, 0.2),
                Coordinate::new("D", 0.0, 0.3),
            ],
            [
                (0, 1, 12.0),
                (0, 2, 100.0),
                (1, 2, 12.0),
                (2, 3, 12.0),
            ],
        )
        .unwrap();

        let path = graph.a_star(0, 3, &GreatCircle).unwrap();

        assert_eq!(path.names(&graph), vec!["A", "B", "C", "D"]);
        assert_relative_eq!(path_cost(&graph, Some(&path)).unwrap(), 36.0);
    }

    #[test]
    fn unreachable() {
        let graph = isolated();

        assert_eq!(graph.a_star(0, 3, &GreatCircle), None);
        assert_eq!(graph.a_star(3, 0, &FlatPlane), None);
    }
}
