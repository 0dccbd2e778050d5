use thiserror::Error;

use graph::Target;

pub mod algorithms;
pub mod builder;
pub mod distance;
pub mod graph;
pub mod types;

pub use algorithms::{
    Algorithm, HeuristicKind,
    astar::AStarSearch,
    bfs::BreadthFirstSearch,
    cost::{PathCost, path_cost},
    greedy::GreedyBestFirstSearch,
    heuristic::{FlatPlane, GreatCircle, Heuristic},
    search,
    tarjan_scc::StronglyConnected,
};
pub use builder::{DEFAULT_NEIGHBORS, GraphBuilder, build_graph};
pub use graph::{Path, csr::KnnGraph};
pub use types::Coordinate;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("node '{0}' not found in graph")]
    NodeNotFound(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum GraphConstructionError {
    #[error("at least 2 coordinates are needed to build a graph, got {0}")]
    TooFewCoordinates(usize),
    #[error("coordinate '{name}' has an invalid position ({latitude}, {longitude})")]
    InvalidPosition {
        name: String,
        latitude: f64,
        longitude: f64,
    },
    #[error("coordinate name '{0}' is not unique")]
    DuplicateName(String),
    #[error("neighbor count must be at least 1")]
    ZeroNeighbors,
    #[error("edge {source_node} -> {target} references a node outside of 0..{node_count}")]
    EdgeOutOfRange {
        source_node: usize,
        target: usize,
        node_count: usize,
    },
}

/// A consecutive pair of path nodes that has no edge in the graph.
#[derive(Debug, Error, PartialEq)]
#[error("path uses edge '{from}' -> '{to}' which is not in the graph")]
pub struct CostLookupError {
    pub from: String,
    pub to: String,
}

pub trait Graph {
    type EV;
    type NV;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Outgoing edges of `node`, in stored order. Unknown nodes have none.
    fn neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a Target<Self::EV>>
    where
        Self::EV: 'a;

    fn degree(&self, node: usize) -> usize;

    fn node_value(&self, node: usize) -> Option<&Self::NV>;

    fn nodes_iter<'a>(&'a self) -> impl Iterator<Item = (usize, &'a Self::NV)>
    where
        Self::NV: 'a;

    fn contains_node(&self, node: usize) -> bool {
        node < self.node_count()
    }
}

/// A graph whose nodes are named geographic coordinates and whose edge
/// values are distances in kilometers.
pub trait CoordGraph: Graph<EV = f64, NV = Coordinate> {
    fn node_id(&self, name: &str) -> Result<usize, GraphError>;

    fn node_name(&self, node: usize) -> Option<&str> {
        self.node_value(node).map(|c| c.name.as_str())
    }
}
