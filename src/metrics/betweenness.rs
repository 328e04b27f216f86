//! Betweenness centrality via Brandes' algorithm.
//!
//! # Algorithm
//!
//! For each source `s`, a BFS counts shortest paths (`sigma`) and records
//! predecessors; dependencies are then accumulated in reverse BFS order.
//! Complexity is O(V * E) on an unweighted graph, with O(V + E) scratch
//! space per source.
//!
//! # Normalization
//!
//! On an undirected graph every pair is seen from both ends, so the raw sums
//! count each pair twice. Scores are divided by `(n-1)(n-2)`, which yields the
//! fraction of unordered pairs whose shortest paths run through the node.
//! Graphs with two or fewer nodes are left unscaled (all scores are zero).

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use tracing::instrument;

use super::Scores;
use crate::network::InteractionGraph;

/// Compute normalized betweenness centrality for every drug.
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count()))]
pub fn betweenness_centrality(g: &InteractionGraph) -> Scores {
    let graph = &g.graph;
    let n = graph.node_count();

    if n == 0 {
        return Scores::new();
    }

    let mut cb: Vec<f64> = vec![0.0; n];

    // Scratch buffers, reset per source.
    let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut dist: Vec<i64> = vec![-1; n];
    let mut delta: Vec<f64> = vec![0.0; n];
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();

    for s in graph.node_indices() {
        let si = s.index();

        stack.clear();
        for p in &mut predecessors {
            p.clear();
        }
        sigma.fill(0.0);
        dist.fill(-1);
        delta.fill(0.0);

        sigma[si] = 1.0;
        dist[si] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            let vi = v.index();
            stack.push(v);

            for w in graph.neighbors(v) {
                let wi = w.index();

                if dist[wi] < 0 {
                    dist[wi] = dist[vi] + 1;
                    queue.push_back(w);
                }

                if dist[wi] == dist[vi] + 1 {
                    sigma[wi] += sigma[vi];
                    predecessors[wi].push(v);
                }
            }
        }

        while let Some(w) = stack.pop() {
            let wi = w.index();

            for &v in &predecessors[wi] {
                let vi = v.index();
                delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
            }

            if wi != si {
                cb[wi] += delta[wi];
            }
        }
    }

    let scale = if n > 2 {
        1.0 / ((n - 1) * (n - 2)) as f64
    } else {
        1.0
    };

    graph
        .node_indices()
        .map(|idx| (g.label(idx).to_string(), cb[idx.index()] * scale))
        .collect()
}
