use crate::{CoordGraph, CostLookupError, graph::Path};

pub trait PathCost: CoordGraph {
    /// Sum of the stored edge weights along `path`.
    ///
    /// `None` (no path found) costs `f64::INFINITY`.
    fn path_cost(&self, path: Option<&Path>) -> Result<f64, CostLookupError>;
}

impl<G: CoordGraph> PathCost for G {
    fn path_cost(&self, path: Option<&Path>) -> Result<f64, CostLookupError> {
        let Some(path) = path else {
            return Ok(f64::INFINITY);
        };

        path.legs().try_fold(0.0, |total, (from, to)| {
            let weight = self
                .neighbors(from)
                .find(|t| t.target() == to)
                .map(|t| *t.value())
                .ok_or_else(|| CostLookupError {
                    from: display_name(self, from),
                    to: display_name(self, to),
                })?;

            Ok(total + weight)
        })
    }
}

fn display_name<G: CoordGraph>(graph: &G, node: usize) -> String {
    graph
        .node_name(node)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{node}"))
}

pub fn path_cost<G: CoordGraph>(graph: &G, path: Option<&Path>) -> Result<f64, CostLookupError> {
    graph.path_cost(path)
}
