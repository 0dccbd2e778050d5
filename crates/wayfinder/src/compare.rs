use std::time::{Duration, Instant};

use knn_graph::{
    Algorithm, CoordGraph, CostLookupError, GraphError, Path, StronglyConnected, path_cost, search,
};
use log::{debug, info, warn};

/// Outcome of one algorithm on one start/goal pair.
#[derive(Debug)]
pub struct Run {
    pub algorithm: Algorithm,
    pub path: Option<Path>,
    pub cost: Result<f64, CostLookupError>,
    pub elapsed: Duration,
}

impl Run {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Resolves both endpoint names. Nothing is searched if either is unknown.
pub fn resolve<G: CoordGraph>(
    graph: &G,
    start: &str,
    goal: &str,
) -> Result<(usize, usize), GraphError> {
    Ok((graph.node_id(start)?, graph.node_id(goal)?))
}

/// Logs the component structure of `graph` and returns whether `start`
/// and `goal` share a strongly connected component.
pub fn same_component<G: CoordGraph>(graph: &G, start: usize, goal: usize) -> bool {
    let ids = graph.component_ids();
    info!(
        "Graph has {} strongly connected components",
        ids.iter().max().map_or(0, |id| id + 1)
    );

    let same = ids.get(start).is_some() && ids.get(start) == ids.get(goal);
    if !same {
        warn!(
            "'{}' and '{}' lie in different components, a route may not exist",
            graph.node_name(start).unwrap_or_default(),
            graph.node_name(goal).unwrap_or_default()
        );
    }

    same
}

/// Runs every algorithm in `algorithms` from `start` to `goal`, in order.
pub fn run<G: CoordGraph>(
    graph: &G,
    start: usize,
    goal: usize,
    algorithms: &[Algorithm],
) -> Vec<Run> {
    algorithms
        .iter()
        .map(|&algorithm| {
            let now = Instant::now();
            let path = search(algorithm, graph, start, goal);
            let elapsed = now.elapsed();

            let cost = path_cost(graph, path.as_ref());
            match (&path, &cost) {
                (Some(path), Ok(cost)) => {
                    debug!("{algorithm}: {} hops, {cost:.3} km in {elapsed:?}", path.hops())
                }
                (None, _) => debug!("{algorithm}: no path in {elapsed:?}"),
                (_, Err(err)) => warn!("{algorithm}: {err}"),
            }

            Run {
                algorithm,
                path,
                cost,
                elapsed,
            }
        })
        .collect()
}

/// Resolves the endpoint names and runs `algorithms` between them.
pub fn compare<G: CoordGraph>(
    graph: &G,
    start: &str,
    goal: &str,
    algorithms: &[Algorithm],
) -> Result<Vec<Run>, GraphError> {
    let (start, goal) = resolve(graph, start, goal)?;
    same_component(graph, start, goal);

    Ok(run(graph, start, goal, algorithms))
}
