use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::{debug, info, instrument};

use crate::error::{PipelineError, Result};
use crate::normalize::Interaction;

/// Undirected simple graph of drugs, one node per label.
#[derive(Debug, Clone)]
pub struct InteractionGraph {
    pub name: String,
    pub graph: UnGraph<String, f32>,
    pub node_map: HashMap<String, NodeIndex>,
}

impl InteractionGraph {
    /// Build the graph from normalized interactions. Repeated pairs (in either
    /// orientation) collapse into one edge and self-interactions are dropped.
    #[instrument(skip(interactions), fields(interactions = interactions.len()))]
    pub fn from_interactions(name: &str, interactions: &[Interaction]) -> Self {
        let mut graph = UnGraph::<String, f32>::new_undirected();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();
        let mut duplicates = 0usize;
        let mut self_loops = 0usize;

        for interaction in interactions {
            let a = *node_map
                .entry(interaction.drug1.clone())
                .or_insert_with(|| graph.add_node(interaction.drug1.clone()));
            let b = *node_map
                .entry(interaction.drug2.clone())
                .or_insert_with(|| graph.add_node(interaction.drug2.clone()));

            if a == b {
                self_loops += 1;
                continue;
            }

            if graph.contains_edge(a, b) {
                duplicates += 1;
            } else {
                graph.add_edge(a, b, interaction.weight);
            }
        }

        if duplicates > 0 || self_loops > 0 {
            debug!(duplicates, self_loops, "collapsed interactions");
        }
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built interaction graph"
        );

        Self {
            name: name.to_string(),
            graph,
            node_map,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.node_map.contains_key(label)
    }

    /// Number of distinct neighbours of `label`, `None` for unknown labels.
    pub fn degree(&self, label: &str) -> Option<usize> {
        self.node_map
            .get(label)
            .map(|&idx| self.graph.neighbors(idx).count())
    }

    pub fn label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    pub fn summary(&self) -> GraphSummary {
        let nodes = self.node_count();
        let edges = self.edge_count();
        let average_degree = if nodes == 0 {
            0.0
        } else {
            2.0 * edges as f64 / nodes as f64
        };

        GraphSummary {
            name: self.name.clone(),
            nodes,
            edges,
            average_degree,
        }
    }
}

/// Size statistics printed before the centrality report.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary {
    pub name: String,
    pub nodes: usize,
    pub edges: usize,
    pub average_degree: f64,
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Type: Graph")?;
        writeln!(f, "Number of nodes: {}", self.nodes)?;
        writeln!(f, "Number of edges: {}", self.edges)?;
        write!(f, "Average degree: {:>9.4}", self.average_degree)
    }
}

/// Quote-safe DOT string body: only `"` and `\` need escaping.
fn dot_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Write `graph` as a Graphviz DOT file with drug names as node labels.
pub fn export_to_graphviz(graph: &UnGraph<String, f32>, path: &Path) -> Result<()> {
    let viz = Dot::with_attr_getters(
        graph,
        &[Config::EdgeNoLabel, Config::NodeNoLabel],
        &|_, _| String::new(),
        &|_, (_, name)| format!("label=\"{}\"", dot_escape(name)),
    );

    std::fs::write(path, format!("{:?}", viz)).map_err(|e| PipelineError::io(path, e))?;
    info!(path = %path.display(), "wrote graphviz file");
    Ok(())
}
