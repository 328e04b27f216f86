//! Centrality metrics over the whole interaction graph.
//!
//! Each metric answers a different question about a drug:
//!
//! - **Degree** (`degree`): how many drugs does it interact with?
//! - **Betweenness** (`betweenness`): how often does it sit on the shortest
//!   route between two other drugs?
//! - **Eigenvector** (`eigenvector`): does it interact with drugs that are
//!   themselves well connected?
//! - **PageRank** (`pagerank`): how likely is a damped random walk over
//!   interactions to be found on it?
//!
//! All metrics return scores keyed by node label.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

pub mod betweenness;
pub mod degree;
pub mod eigenvector;
pub mod pagerank;

pub use betweenness::betweenness_centrality;
pub use degree::degree_centrality;
pub use eigenvector::{eigenvector_centrality, EigenvectorConfig, EigenvectorResult};
pub use pagerank::{pagerank, PageRankConfig, PageRankResult};

/// Score per node label.
pub type Scores = HashMap<String, f64>;

/// Every node tied for the highest score. Empty for empty input.
pub fn top_nodes(scores: &Scores) -> BTreeSet<String> {
    let Some(max) = scores.values().copied().reduce(f64::max) else {
        return BTreeSet::new();
    };

    scores
        .iter()
        .filter(|(_, v)| **v == max)
        .map(|(k, _)| k.clone())
        .collect()
}

/// The `k` highest scores, descending; equal scores are ordered by label.
pub fn ranked(scores: &Scores, k: usize) -> Vec<(String, f64)> {
    let mut all: Vec<(&String, f64)> = scores.iter().map(|(k, &v)| (k, v)).collect();
    all.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    all.into_iter()
        .take(k)
        .map(|(label, v)| (label.clone(), v))
        .collect()
}
