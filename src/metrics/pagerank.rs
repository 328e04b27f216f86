//! PageRank by power iteration.
//!
//! ```text
//! PR(v) = (1 - d) / N + d * (Σ PR(u) / deg(u) for u ~ v + Σ PR(z) / N for dangling z)
//! ```
//!
//! Each undirected interaction acts as a link in both directions. Isolated
//! nodes are dangling and spread their rank uniformly.

use tracing::{instrument, warn};

use super::Scores;
use crate::network::InteractionGraph;

/// Configuration for PageRank computation.
#[derive(Debug, Clone)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Default: 0.85.
    pub damping: f64,
    /// Per-node convergence threshold; iteration stops when the L1 change is
    /// below `n * tolerance`. Default: 1e-6.
    pub tolerance: f64,
    /// Maximum number of iterations.
    /// Default: 100.
    pub max_iter: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-6,
            max_iter: 100,
        }
    }
}

/// Result of a PageRank computation.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    pub scores: Scores,
    pub iterations: usize,
    pub converged: bool,
}

#[must_use]
#[instrument(skip(g, config), fields(nodes = g.node_count()))]
pub fn pagerank(g: &InteractionGraph, config: &PageRankConfig) -> PageRankResult {
    let graph = &g.graph;
    let n = graph.node_count();

    if n == 0 {
        return PageRankResult {
            scores: Scores::new(),
            iterations: 0,
            converged: true,
        };
    }

    let n_f64 = n as f64;
    let base = (1.0 - config.damping) / n_f64;
    let degree: Vec<usize> = graph
        .node_indices()
        .map(|idx| graph.neighbors(idx).count())
        .collect();

    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        let dangling: f64 = degree
            .iter()
            .zip(&ranks)
            .filter(|(d, _)| **d == 0)
            .map(|(_, r)| r)
            .sum();
        let teleport = base + config.damping * dangling / n_f64;
        new_ranks.fill(teleport);

        for idx in graph.node_indices() {
            let i = idx.index();
            if degree[i] == 0 {
                continue;
            }
            let share = config.damping * ranks[i] / degree[i] as f64;
            for nbr in graph.neighbors(idx) {
                new_ranks[nbr.index()] += share;
            }
        }

        let delta: f64 = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut ranks, &mut new_ranks);

        if delta < n_f64 * config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(iterations, "pagerank did not converge");
    }

    let scores = graph
        .node_indices()
        .map(|idx| (g.label(idx).to_string(), ranks[idx.index()]))
        .collect();

    PageRankResult {
        scores,
        iterations,
        converged,
    }
}
