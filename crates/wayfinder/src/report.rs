use std::fmt::Display;

use knn_graph::CoordGraph;
use serde::Serialize;

use crate::compare::Run;

#[derive(Debug, Serialize)]
pub struct Report {
    pub start: String,
    pub goal: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub runs: Vec<RunReport>,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub algorithm: String,
    /// Node names from start to goal, `None` if no path was found.
    pub path: Option<Vec<String>>,
    pub hops: Option<usize>,
    /// `None` stands for an infinite cost.
    pub cost_km: Option<f64>,
    pub error: Option<String>,
    pub elapsed_us: u128,
}

impl RunReport {
    pub fn new<G: CoordGraph>(graph: &G, run: &Run) -> Self {
        let (cost_km, error) = match &run.cost {
            Ok(cost) if cost.is_finite() => (Some(*cost), None),
            Ok(_) => (None, None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            algorithm: run.algorithm.to_string(),
            path: run.path.as_ref().map(|path| {
                path.names(graph)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            }),
            hops: run.path.as_ref().map(|path| path.hops()),
            cost_km,
            error,
            elapsed_us: run.elapsed.as_micros(),
        }
    }
}

impl Report {
    pub fn new<G: CoordGraph>(graph: &G, start: &str, goal: &str, runs: &[Run]) -> Self {
        Self {
            start: start.to_string(),
            goal: goal.to_string(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            runs: runs.iter().map(|run| RunReport::new(graph, run)).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} -> {} ({} nodes, {} edges)",
            self.start, self.goal, self.node_count, self.edge_count
        )?;
        writeln!(
            f,
            "{:<20} {:>6} {:>12} {:>12}  path",
            "algorithm", "hops", "cost [km]", "time [us]"
        )?;

        for run in &self.runs {
            let hops = run.hops.map_or_else(|| "-".to_string(), |h| h.to_string());
            let cost = match (&run.cost_km, &run.error) {
                (Some(cost), _) => format!("{cost:.3}"),
                (None, Some(_)) => "error".to_string(),
                (None, None) => "inf".to_string(),
            };
            let path = match (&run.path, &run.error) {
                (_, Some(err)) => err.clone(),
                (Some(path), None) => path.join(" -> "),
                (None, None) => "no path found".to_string(),
            };

            writeln!(
                f,
                "{:<20} {:>6} {:>12} {:>12}  {}",
                run.algorithm, hops, cost, run.elapsed_us, path
            )?;
        }

        Ok(())
    }
}
