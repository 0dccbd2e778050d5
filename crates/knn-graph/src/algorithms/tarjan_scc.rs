use log::info;

use crate::Graph;

#[derive(Clone, Copy, Debug)]
struct NodeData {
    rootindex: Option<usize>,
}

struct TarjanSCCData {
    index: usize,
    nodes: Vec<NodeData>,
    stack: Vec<usize>,
    sccs: Vec<Vec<usize>>,
}

impl TarjanSCCData {
    fn new() -> Self {
        TarjanSCCData {
            index: 0,
            nodes: Vec::new(),
            stack: Vec::new(),
            sccs: Vec::new(),
        }
    }

    fn run<G: Graph>(&mut self, g: &G) {
        info!("SCC for graph with {} nodes", g.node_count());
        self.nodes.clear();
        self.nodes
            .resize(g.node_count(), NodeData { rootindex: None });

        for v in 0..g.node_count() {
            let visited = self.nodes[v].rootindex.is_some();
            if !visited {
                self.visit(g, v);
            }
        }
    }

    fn visit<G: Graph>(&mut self, g: &G, v: usize) {
        let mut v_is_local_root = true;
        self.nodes[v].rootindex = Some(self.index);
        self.index += 1;
        self.stack.push(v);

        for w in g.neighbors(v) {
            let w = w.target();
            if self.nodes[w].rootindex.is_none() {
                self.visit(g, w);
            }

            if self.nodes[w].rootindex < self.nodes[v].rootindex {
                self.nodes[v].rootindex = self.nodes[w].rootindex;
                v_is_local_root = false;
            }
        }

        if v_is_local_root {
            let mut scc = Vec::new();
            while let Some(&w) = self.stack.last() {
                if self.nodes[w].rootindex < self.nodes[v].rootindex {
                    break;
                }
                self.stack.pop();
                // Finished nodes must not lower the root index of later ones.
                self.nodes[w].rootindex = Some(usize::MAX);
                scc.push(w);
            }

            self.sccs.push(scc);
        }
    }
}

pub trait StronglyConnected {
    /// Strongly connected components over the outgoing edges.
    fn strongly_connected_components(&self) -> Vec<Vec<usize>>;

    /// Maps every node to the index of its component in
    /// [`strongly_connected_components`](Self::strongly_connected_components).
    fn component_ids(&self) -> Vec<usize>;
}

impl<G> StronglyConnected for G
where
    G: Graph,
{
    fn strongly_connected_components(&self) -> Vec<Vec<usize>> {
        let mut tarjan_scc = TarjanSCCData::new();

        tarjan_scc.run(self);

        tarjan_scc.sccs
    }

    fn component_ids(&self) -> Vec<usize> {
        let mut ids = vec![0; self.node_count()];

        for (id, scc) in self.strongly_connected_components().iter().enumerate() {
            scc.iter().for_each(|node| ids[*node] = id);
        }

        ids
    }
}
