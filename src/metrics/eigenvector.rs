//! Eigenvector centrality via power iteration.
//!
//! Iterates `x <- (A + I) x` and normalizes to unit L2 norm after every
//! step. The identity shift keeps bipartite graphs (stars, even cycles) from
//! oscillating between two vectors; it changes the eigenvalues but not the
//! principal eigenvector. Iteration stops once the L1 change falls below
//! `n * tolerance`.

use tracing::{instrument, warn};

use super::Scores;
use crate::network::InteractionGraph;

#[derive(Debug, Clone)]
pub struct EigenvectorConfig {
    /// Default: 100.
    pub max_iter: usize,
    /// Per-node convergence threshold. Default: 1e-6.
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tolerance: 1e-6,
        }
    }
}

/// Result of eigenvector centrality computation.
#[derive(Debug, Clone)]
pub struct EigenvectorResult {
    pub scores: Scores,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the algorithm converged within `max_iter`.
    pub converged: bool,
}

/// Compute eigenvector centrality for every drug.
///
/// Failing to converge is not an error: the last iterate is returned with
/// `converged = false` and a warning is logged.
#[must_use]
#[instrument(skip(g, config), fields(nodes = g.node_count()))]
pub fn eigenvector_centrality(
    g: &InteractionGraph,
    config: &EigenvectorConfig,
) -> EigenvectorResult {
    let graph = &g.graph;
    let n = graph.node_count();

    if n == 0 {
        return EigenvectorResult {
            scores: Scores::new(),
            iterations: 0,
            converged: true,
        };
    }

    let mut x: Vec<f64> = vec![1.0 / n as f64; n];
    let threshold = n as f64 * config.tolerance;

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        let mut next = x.clone();
        for idx in graph.node_indices() {
            let xi = x[idx.index()];
            for nbr in graph.neighbors(idx) {
                next[nbr.index()] += xi;
            }
        }

        let norm = next.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for v in &mut next {
                *v /= norm;
            }
        }

        let diff: f64 = x.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
        x = next;

        if diff < threshold {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(iterations, "eigenvector centrality did not converge");
    }

    let scores = graph
        .node_indices()
        .map(|idx| (g.label(idx).to_string(), x[idx.index()]))
        .collect();

    EigenvectorResult {
        scores,
        iterations,
        converged,
    }
}
