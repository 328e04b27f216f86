//! Degree centrality: neighbour count divided by `n - 1`.

use tracing::instrument;

use super::Scores;
use crate::network::InteractionGraph;

/// Compute degree centrality for every drug.
///
/// A graph with a single node gives that node a score of 1.0.
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count()))]
pub fn degree_centrality(g: &InteractionGraph) -> Scores {
    let n = g.node_count();
    if n <= 1 {
        return g.node_map.keys().map(|k| (k.clone(), 1.0)).collect();
    }

    let scale = 1.0 / (n - 1) as f64;
    g.graph
        .node_indices()
        .map(|idx| {
            let degree = g.graph.neighbors(idx).count();
            (g.label(idx).to_string(), degree as f64 * scale)
        })
        .collect()
}
