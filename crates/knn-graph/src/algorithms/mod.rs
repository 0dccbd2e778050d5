use std::fmt::Display;

use ordered_float::OrderedFloat;

use crate::{CoordGraph, graph::Path};

use astar::AStarSearch;
use bfs::BreadthFirstSearch;
use greedy::GreedyBestFirstSearch;
use heuristic::{FlatPlane, GreatCircle, Heuristic};

pub mod astar;
pub mod bfs;
pub mod cost;
pub mod greedy;
pub mod heuristic;
pub mod tarjan_scc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    GreatCircle,
    FlatPlane,
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, lat: f64, lon: f64, goal_lat: f64, goal_lon: f64) -> f64 {
        match self {
            Self::GreatCircle => GreatCircle.estimate(lat, lon, goal_lat, goal_lon),
            Self::FlatPlane => FlatPlane.estimate(lat, lon, goal_lat, goal_lon),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    GreedyBestFirst,
    AStar(HeuristicKind),
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar(HeuristicKind::GreatCircle),
        Algorithm::AStar(HeuristicKind::FlatPlane),
    ];
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BreadthFirst => write!(f, "BFS"),
            Self::GreedyBestFirst => write!(f, "Greedy Best-First"),
            Self::AStar(HeuristicKind::GreatCircle) => write!(f, "A* (great-circle)"),
            Self::AStar(HeuristicKind::FlatPlane) => write!(f, "A* (flat-plane)"),
        }
    }
}

/// Run `algorithm` from `start` to `goal`. `None` if the goal is not
/// reachable or either node is not in the graph.
pub fn search<G: CoordGraph>(
    algorithm: Algorithm,
    graph: &G,
    start: usize,
    goal: usize,
) -> Option<Path> {
    match algorithm {
        Algorithm::BreadthFirst => graph.bfs(start, goal),
        Algorithm::GreedyBestFirst => graph.greedy_best_first(start, goal),
        Algorithm::AStar(heuristic) => graph.a_star(start, goal, &heuristic),
    }
}

/// Frontier ordering: by `priority`, ties broken by node name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FrontierKey<'a> {
    pub priority: OrderedFloat<f64>,
    pub name: &'a str,
}

impl<'a> FrontierKey<'a> {
    pub fn new(priority: f64, name: &'a str) -> Self {
        Self {
            priority: OrderedFloat(priority),
            name,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use crate::{Coordinate, GraphBuilder, KnnGraph};

    /// `P(0,0)`, `Q(0,1)`, `R(0,2)` with `k = 2`.
    pub fn line() -> KnnGraph {
        GraphBuilder::new()
            .coordinates(vec![
                Coordinate::new("P", 0.0, 0.0),
                Coordinate::new("Q", 0.0, 1.0),
                Coordinate::new("R", 0.0, 2.0),
            ])
            .neighbors(2)
            .build()
            .unwrap()
    }

    /// `A <-> B <-> C` plus `D` without any edges.
    pub fn isolated() -> KnnGraph {
        KnnGraph::from_edges(
            vec![
                Coordinate::new("A", 0.0, 0.0),
                Coordinate::new("B", 0.0, 0.1),
                Coordinate::new("C", 0.0, 0.2),
                Coordinate::new("D", 0.0, 0.3),
            ],
            [
                (0, 1, 11.1),
                (1, 0, 11.1),
                (1, 2, 11.1),
                (2, 1, 11.1),
            ],
        )
        .unwrap()
    }

    /// Seeded random coordinates in a small box near the equator.
    pub fn random(n: usize, k: usize, seed: u64) -> KnnGraph {
        let mut rng = SmallRng::seed_from_u64(seed);
        let coordinates = (0..n)
            .map(|i| {
                Coordinate::new(
                    format!("node-{i:03}"),
                    rng.random_range(-0.5..0.5),
                    rng.random_range(-0.5..0.5),
                )
            })
            .collect();

        GraphBuilder::new()
            .coordinates(coordinates)
            .neighbors(k)
            .build()
            .unwrap()
    }
}
