use log::info;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::{CoordGraph, Coordinate, Graph, GraphConstructionError, GraphError, graph::Target};

#[derive(Debug, PartialEq)]
pub struct Csr<EV> {
    offsets: Vec<usize>,
    targets: Vec<Target<EV>>,
}

impl<EV> Csr<EV> {
    /// Create a `CSR` from `offsets` and `targets`.
    ///
    /// `offsets[i]` contains the index of the first target of node `i` in
    /// `targets`, `offsets[node_count]` the total number of targets.
    pub fn new(offsets: Vec<usize>, targets: Vec<Target<EV>>) -> Csr<EV> {
        Self { offsets, targets }
    }

    /// Flattens one target list per node into a `CSR`.
    pub fn from_rows(rows: Vec<Vec<Target<EV>>>) -> Csr<EV> {
        let offsets = prefix_sum(rows.iter().map(Vec::len));
        let targets = rows.into_iter().flatten().collect();

        Self { offsets, targets }
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn degree(&self, i: usize) -> usize {
        self.targets(i).len()
    }

    /// Targets of node `i`; empty for nodes outside the `CSR`.
    pub fn targets(&self, i: usize) -> &[Target<EV>] {
        match (self.offsets.get(i), self.offsets.get(i + 1)) {
            (Some(&from), Some(&to)) => &self.targets[from..to],
            _ => &[],
        }
    }
}

impl<EV> Default for Csr<EV> {
    fn default() -> Self {
        Csr {
            offsets: vec![0],
            targets: vec![],
        }
    }
}

/// Directed proximity graph over named coordinates. Edge values are
/// great-circle distances in kilometers and every adjacency list is sorted
/// ascending by distance.
#[derive(Debug, PartialEq)]
pub struct KnnGraph {
    node_values: Vec<Coordinate>,
    csr_out: Csr<f64>,
    name_index: FxHashMap<String, usize>,
}

impl KnnGraph {
    pub(crate) fn from_rows(
        node_values: Vec<Coordinate>,
        rows: Vec<Vec<Target<f64>>>,
    ) -> Result<KnnGraph, GraphConstructionError> {
        debug_assert_eq!(node_values.len(), rows.len());

        let mut name_index = FxHashMap::with_capacity_and_hasher(node_values.len(), FxBuildHasher);
        for (id, node) in node_values.iter().enumerate() {
            if name_index.insert(node.name.clone(), id).is_some() {
                return Err(GraphConstructionError::DuplicateName(node.name.clone()));
            }
        }

        let g = Self {
            node_values,
            csr_out: Csr::from_rows(rows),
            name_index,
        };

        info!(
            "Created k-nn graph (node_count: {:?}, edge_count = {:?})",
            g.node_count(),
            g.edge_count()
        );

        Ok(g)
    }

    /// Build a graph with explicit adjacency from `(source, target, weight)`
    /// triples. Each adjacency list is stably sorted by weight.
    pub fn from_edges(
        node_values: Vec<Coordinate>,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<KnnGraph, GraphConstructionError> {
        let node_count = node_values.len();
        let mut rows: Vec<Vec<Target<f64>>> = Vec::with_capacity(node_count);
        rows.resize_with(node_count, Vec::new);

        for (s, t, v) in edges {
            if s >= node_count || t >= node_count {
                return Err(GraphConstructionError::EdgeOutOfRange {
                    source_node: s,
                    target: t,
                    node_count,
                });
            }
            rows[s].push(Target::new(t, v));
        }

        rows.iter_mut()
            .for_each(|row| row.sort_by(|a, b| a.value().total_cmp(b.value())));

        KnnGraph::from_rows(node_values, rows)
    }

    /// Weight of the edge `from -> to`, if the graph has one.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        self.csr_out
            .targets(from)
            .iter()
            .find(|t| t.target() == to)
            .map(|t| *t.value())
    }
}

impl Graph for KnnGraph {
    type EV = f64;
    type NV = Coordinate;

    fn node_count(&self) -> usize {
        self.node_values.len()
    }

    fn edge_count(&self) -> usize {
        self.csr_out.edge_count()
    }

    fn neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a Target<f64>>
    where
        f64: 'a,
    {
        self.csr_out.targets(node).iter()
    }

    fn degree(&self, node: usize) -> usize {
        self.csr_out.degree(node)
    }

    fn node_value(&self, node: usize) -> Option<&Coordinate> {
        self.node_values.get(node)
    }

    /// Returns an Iterator over all nodes.
    ///
    /// The Iterator yields pairs `(i, val)`, where `i` is the index
    /// of the node and `val` the coordinate of that node.
    fn nodes_iter<'a>(&'a self) -> impl Iterator<Item = (usize, &'a Coordinate)>
    where
        Coordinate: 'a,
    {
        self.node_values.iter().enumerate()
    }
}

impl CoordGraph for KnnGraph {
    fn node_id(&self, name: &str) -> Result<usize, GraphError> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }
}

fn prefix_sum(degrees: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut sums = vec![0];
    sums.extend(degrees.scan(0, |total, degree| {
        *total += degree;
        Some(*total)
    }));

    sums
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Target;

    fn nodes(n: usize) -> Vec<Coordinate> {
        (0..n)
            .map(|i| Coordinate::new(format!("n{i}"), 0.0, i as f64))
            .collect()
    }

    fn setup() -> KnnGraph {
        KnnGraph::from_edges(
            nodes(6),
            [
                (0, 3, 3.0),
                (0, 5, 1.0),
                (1, 0, 1.0),
                (1, 5, 4.0),
                (2, 4, 2.0),
                (3, 0, 3.0),
                (3, 2, 1.0),
                (4, 1, 3.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn csr_from_vectors() {
        let offsets = vec![0, 2, 3, 4];
        let targets = vec![
            Target::new(2, ()),
            Target::new(3, ()),
            Target::new(1, ()),
            Target::new(0, ()),
        ];
        let csr = Csr::new(offsets.clone(), targets.clone());
        assert_eq!(csr.targets(1), targets.get(offsets[1]..offsets[2]).unwrap());
        assert_eq!(csr.degree(0), 2);
        assert_eq!(csr.degree(2), 1);
        assert_eq!(csr.edge_count(), 4, "Edgecount should be 4.");
    }

    #[test]
    fn csr_out_of_range_is_empty() {
        let csr: Csr<()> = Csr::default();

        assert_eq!(csr.node_count(), 0);
        assert!(csr.targets(0).is_empty());
        assert_eq!(csr.degree(42), 0);
    }

    #[test]
    fn csr_from_rows() {
        let csr = Csr::from_rows(vec![
            vec![Target::new(1, 1.0), Target::new(2, 2.0)],
            vec![],
            vec![Target::new(0, 2.0)],
        ]);

        assert_eq!(csr.node_count(), 3);
        assert_eq!(csr.edge_count(), 3);
        assert_eq!(csr.degree(1), 0);
        assert_eq!(csr.targets(2)[0].target(), 0);
    }

    #[test]
    fn from_edges() {
        let graph = setup();

        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 8);
        assert_eq!(graph.degree(5), 0);
        assert_eq!(
            graph.neighbors(0).map(|x| x.target()).collect::<Vec<usize>>(),
            vec![5, 3],
            "Neighbors of node 0 sorted by weight"
        );
        assert_eq!(
            graph.neighbors(3).map(|x| x.target()).collect::<Vec<usize>>(),
            vec![2, 0]
        );
        assert_eq!(graph.edge_weight(1, 5), Some(4.0));
        assert_eq!(graph.edge_weight(5, 1), None);
    }

    #[test]
    fn from_edges_out_of_range() {
        let result = KnnGraph::from_edges(nodes(2), [(0, 1, 1.0), (1, 2, 1.0)]);

        assert_eq!(
            result,
            Err(GraphConstructionError::EdgeOutOfRange {
                source_node: 1,
                target: 2,
                node_count: 2
            })
        );
    }

    #[test]
    fn duplicate_names() {
        let mut nodes = nodes(3);
        nodes[2].name = "n0".to_string();

        assert_eq!(
            KnnGraph::from_edges(nodes, []),
            Err(GraphConstructionError::DuplicateName("n0".to_string()))
        );
    }

    #[test]
    fn lookup_by_name() {
        let graph = setup();

        assert_eq!(graph.node_id("n4"), Ok(4));
        assert_eq!(graph.node_name(4), Some("n4"));
        assert_eq!(
            graph.node_id("N4"),
            Err(GraphError::NodeNotFound("N4".to_string()))
        );
    }
}
