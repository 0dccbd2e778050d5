use log::debug;

use crate::{
    Coordinate, GraphConstructionError, KnnGraph, distance::great_circle, graph::Target,
};

/// Number of nearest neighbors every node is connected to.
pub const DEFAULT_NEIGHBORS: usize = 10;

pub struct Uninitialized {}

pub struct FromCoordinates {
    coordinates: Vec<Coordinate>,
    neighbors: usize,
}

#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized {},
        }
    }

    pub fn coordinates(self, coordinates: Vec<Coordinate>) -> GraphBuilder<FromCoordinates> {
        GraphBuilder {
            state: FromCoordinates {
                coordinates,
                neighbors: DEFAULT_NEIGHBORS,
            },
        }
    }
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder<FromCoordinates> {
    /// Set the neighbor count `k`. Defaults to [`DEFAULT_NEIGHBORS`].
    pub fn neighbors(mut self, k: usize) -> Self {
        self.state.neighbors = k;
        self
    }

    /// Connect every node to its `k` nearest nodes by great-circle distance.
    ///
    /// Candidates are stably sorted by distance, so equally distant
    /// neighbors keep their input order. With fewer than `k + 1` nodes every
    /// node is connected to all others.
    pub fn build(self) -> Result<KnnGraph, GraphConstructionError> {
        let FromCoordinates {
            coordinates,
            neighbors: k,
        } = self.state;

        if coordinates.len() < 2 {
            return Err(GraphConstructionError::TooFewCoordinates(coordinates.len()));
        }
        if k == 0 {
            return Err(GraphConstructionError::ZeroNeighbors);
        }
        if let Some(invalid) = coordinates.iter().find(|c| !c.is_valid()) {
            return Err(GraphConstructionError::InvalidPosition {
                name: invalid.name.clone(),
                latitude: invalid.latitude,
                longitude: invalid.longitude,
            });
        }

        debug!(
            "Computing {}-nearest neighbors for {} coordinates",
            k,
            coordinates.len()
        );

        let rows = coordinates
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let mut candidates: Vec<Target<f64>> = coordinates
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(j, other)| Target::new(j, great_circle(node.lat_lon(), other.lat_lon())))
                    .collect();

                candidates.sort_by(|a, b| a.value().total_cmp(b.value()));
                candidates.truncate(k);
                candidates
            })
            .collect();

        KnnGraph::from_rows(coordinates, rows)
    }
}

/// Build the proximity graph with [`DEFAULT_NEIGHBORS`] neighbors per node.
pub fn build_graph(coordinates: &[Coordinate]) -> Result<KnnGraph, GraphConstructionError> {
    GraphBuilder::new().coordinates(coordinates.to_vec()).build()
}
