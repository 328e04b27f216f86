use std::path::PathBuf;

use crate::metrics::eigenvector::EigenvectorConfig;
use crate::metrics::pagerank::PageRankConfig;
use crate::render::Physics;

/// Interaction list from the SNAP ChCh-Miner dataset (file name as published).
pub const INTERACTIONS_PATH: &str = "ChCh-Miner_durgbank-chem-chem.tsv";
/// Two-column lookup written by the `preprocessing` binary.
pub const LOOKUP_PATH: &str = "drug_lookup.csv";
pub const HTML_PATH: &str = "drug_interactions.html";
pub const DOT_PATH: &str = "drug_interactions.dot";
pub const GRAPH_NAME: &str = "Drug Interactions Network";
pub const INTEREST: [&str; 3] = ["Kanamycin", "Oxytetracycline", "Streptomycin"];
const TOP_K: usize = 10;

/// Every setting of a run. There is no CLI or config file; `Default` is the
/// configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub interactions_path: PathBuf,
    pub lookup_path: PathBuf,
    pub html_path: PathBuf,
    pub dot_path: PathBuf,
    pub graph_name: String,
    pub interest: Vec<String>,
    /// Rows printed per metric in the report.
    pub top_k: usize,
    pub physics: Physics,
    pub eigenvector: EigenvectorConfig,
    pub pagerank: PageRankConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interactions_path: PathBuf::from(INTERACTIONS_PATH),
            lookup_path: PathBuf::from(LOOKUP_PATH),
            html_path: PathBuf::from(HTML_PATH),
            dot_path: PathBuf::from(DOT_PATH),
            graph_name: GRAPH_NAME.to_string(),
            interest: INTEREST.iter().map(|s| s.to_string()).collect(),
            top_k: TOP_K,
            physics: Physics::default(),
            eigenvector: EigenvectorConfig::default(),
            pagerank: PageRankConfig::default(),
        }
    }
}
