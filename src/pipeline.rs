//! One pass from input files to report and visual artifacts. Every stage's
//! output is handed to the next as a plain value.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::Result;
use crate::loader::{read_interactions, read_lookup};
use crate::metrics::{
    betweenness_centrality, degree_centrality, eigenvector_centrality, pagerank, ranked,
    top_nodes,
};
use crate::network::{export_to_graphviz, GraphSummary, InteractionGraph};
use crate::normalize::{normalize, UnmappedReport};
use crate::render::render_html;
use crate::subgraph::select;

/// What a run prints to stdout.
#[derive(Debug, Clone)]
pub struct Report {
    pub unmapped: UnmappedReport,
    pub summary: GraphSummary,
    pub top_degree: BTreeSet<String>,
    pub top_betweenness: BTreeSet<String>,
    pub degree: Vec<(String, f64)>,
    pub betweenness: Vec<(String, f64)>,
    pub eigenvector: Vec<(String, f64)>,
    pub pagerank: Vec<(String, f64)>,
    pub subgraph_nodes: usize,
    pub subgraph_edges: usize,
}

#[instrument(skip_all)]
pub fn run(config: &Config) -> Result<Report> {
    let raw = read_interactions(&config.interactions_path)?;
    let lookup = read_lookup(&config.lookup_path)?;
    if lookup.is_empty() {
        warn!("lookup table is empty; every drug keeps its DrugBank ID");
    }

    let normalized = normalize(&raw, &lookup);
    info!(
        unmapped = normalized.report.unmapped,
        distinct = normalized.report.codes.len(),
        "normalized interactions"
    );

    let graph = InteractionGraph::from_interactions(&config.graph_name, &normalized.interactions);

    let degree = degree_centrality(&graph);
    let betweenness = betweenness_centrality(&graph);
    let eigenvector = eigenvector_centrality(&graph, &config.eigenvector);
    let pagerank = pagerank(&graph, &config.pagerank);
    info!(
        eigenvector_iterations = eigenvector.iterations,
        pagerank_iterations = pagerank.iterations,
        "computed centrality"
    );

    let sub = select(&graph, config.interest.as_slice());
    if sub.is_empty() {
        warn!("no interaction touches a drug of interest");
    }
    render_html(&sub, &config.graph_name, &config.physics, &config.html_path)?;
    export_to_graphviz(&sub.graph, &config.dot_path)?;

    Ok(Report {
        unmapped: normalized.report,
        summary: graph.summary(),
        top_degree: top_nodes(&degree),
        top_betweenness: top_nodes(&betweenness),
        degree: ranked(&degree, config.top_k),
        betweenness: ranked(&betweenness, config.top_k),
        eigenvector: ranked(&eigenvector.scores, config.top_k),
        pagerank: ranked(&pagerank.scores, config.top_k),
        subgraph_nodes: sub.graph.node_count(),
        subgraph_edges: sub.graph.edge_count(),
    })
}

fn write_ranking(f: &mut fmt::Formatter<'_>, title: &str, rows: &[(String, f64)]) -> fmt::Result {
    writeln!(f, "Top {} by {title}:", rows.len())?;
    for (i, (name, score)) in rows.iter().enumerate() {
        writeln!(f, "{:>4}. {name:<40} {score:.6}", i + 1)?;
    }
    Ok(())
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().cloned().collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Percentage of drug1 column that was not converted to common name: {}",
            self.unmapped.first_column_fraction()
        )?;
        writeln!(
            f,
            "Fraction of all endpoints without a common name: {} ({} distinct IDs)",
            self.unmapped.fraction(),
            self.unmapped.codes.len()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "Node with the highest degree centrality:")?;
        writeln!(f, "{{{}}}", join(&self.top_degree))?;
        writeln!(f, "Node with the highest betweenness centrality:")?;
        writeln!(f, "{{{}}}", join(&self.top_betweenness))?;
        writeln!(f)?;
        write_ranking(f, "degree centrality", &self.degree)?;
        write_ranking(f, "betweenness centrality", &self.betweenness)?;
        write_ranking(f, "eigenvector centrality", &self.eigenvector)?;
        write_ranking(f, "PageRank", &self.pagerank)?;
        writeln!(f)?;
        write!(
            f,
            "Subgraph: {} nodes, {} edges",
            self.subgraph_nodes, self.subgraph_edges
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use std::path::Path;

    fn config_in(dir: &Path) -> Config {
        Config {
            interactions_path: dir.join("interactions.tsv"),
            lookup_path: dir.join("lookup.csv"),
            html_path: dir.join("out.html"),
            dot_path: dir.join("out.dot"),
            ..Config::default()
        }
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(
            &config.interactions_path,
            "DB01\tDB02\nDB01\tDB03\nDB01\tDB04\nDB04\tDB05\nDB06\tDB02\nDB02\tDB01\n",
        )
        .unwrap();
        std::fs::write(
            &config.lookup_path,
            "DrugBank ID,Common name\n\
             DB01,Phenytoin\n\
             DB02,Kanamycin\n\
             DB03,Warfarin\n\
             DB04,Streptomycin\n",
        )
        .unwrap();

        let report = run(&config).unwrap();

        assert_eq!(report.summary.nodes, 6);
        assert_eq!(report.summary.edges, 5);
        assert_eq!(report.unmapped.unmapped, 2);
        assert_eq!(report.unmapped.codes.len(), 2);
        assert_eq!(report.unmapped.first_column_fraction(), 1.0 / 6.0);
        assert_eq!(
            report.top_degree,
            BTreeSet::from(["Phenytoin".to_string()])
        );
        assert_eq!(report.degree[0].0, "Phenytoin");
        assert_eq!(report.pagerank.len(), 6);

        // Kanamycin and Streptomycin touch every edge except Phenytoin-Warfarin.
        assert_eq!(report.subgraph_edges, 4);
        assert_eq!(report.subgraph_nodes, 5);

        let html = std::fs::read_to_string(&config.html_path).unwrap();
        assert!(html.contains("\"label\":\"Kanamycin\""));
        assert!(html.contains("\"label\":\"DB06\""));
        let dot = std::fs::read_to_string(&config.dot_path).unwrap();
        assert!(dot.contains("label=\"Streptomycin\""));

        let text = report.to_string();
        assert!(text.contains("Node with the highest degree centrality:\n{Phenytoin}"));
        assert!(text.contains("Number of nodes: 6"));
        assert!(text.contains("Top 6 by PageRank:"));
    }

    #[test]
    fn test_run_missing_lookup_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.interactions_path, "DB01\tDB02\n").unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
        assert!(!config.html_path.exists());
    }
}
