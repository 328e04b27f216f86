//! Neighbourhood of the drugs of interest.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::{info, instrument, warn};

use crate::network::InteractionGraph;

/// Interactions touching at least one drug of interest, as a graph of its own.
#[derive(Debug, Clone)]
pub struct Subgraph {
    pub graph: UnGraph<String, f32>,
    /// Interest drugs that were found in the full graph.
    pub present: BTreeSet<String>,
}

impl Subgraph {
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Edges as label pairs, in the order they were selected.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()].as_str(), self.graph[e.target()].as_str()))
            .collect()
    }
}

/// Keep every edge with at least one endpoint in `interest`. The result is
/// empty when no interest drug is in the graph.
#[instrument(skip(g, interest))]
pub fn select<S: AsRef<str>>(g: &InteractionGraph, interest: &[S]) -> Subgraph {
    let present: BTreeSet<String> = interest
        .iter()
        .map(|s| s.as_ref())
        .filter(|name: &&str| {
            let found = g.contains(name);
            if !found {
                warn!(drug = *name, "drug of interest not in graph");
            }
            found
        })
        .map(str::to_string)
        .collect();

    let mut graph = UnGraph::<String, f32>::new_undirected();
    let mut node_map: HashMap<NodeIndex, NodeIndex> = HashMap::new();

    for edge in g.graph.edge_references() {
        let (a, b) = (edge.source(), edge.target());
        if !present.contains(g.label(a)) && !present.contains(g.label(b)) {
            continue;
        }

        let na = *node_map
            .entry(a)
            .or_insert_with(|| graph.add_node(g.label(a).to_string()));
        let nb = *node_map
            .entry(b)
            .or_insert_with(|| graph.add_node(g.label(b).to_string()));
        graph.add_edge(na, nb, *edge.weight());
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "selected subgraph"
    );

    Subgraph { graph, present }
}
