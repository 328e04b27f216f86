//! Interactive HTML view of a subgraph, drawn by vis-network with a
//! repulsion force layout.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use crate::error::{PipelineError, Result};
use crate::subgraph::Subgraph;

const VIS_NETWORK_JS: &str =
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";
const INTEREST_COLOR: &str = "#e4572e";
const NODE_COLOR: &str = "#97c2fc";
const BASE_SIZE: usize = 10;
const SIZE_PER_NEIGHBOUR: usize = 3;
const MAX_SIZE: usize = 60;

/// Parameters of the repulsion solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Physics {
    pub node_distance: f64,
    pub central_gravity: f64,
    pub spring_length: f64,
    /// Spring strength.
    #[serde(rename = "springConstant")]
    pub spring_strength: f64,
    pub damping: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            node_distance: 420.0,
            central_gravity: 0.33,
            spring_length: 110.0,
            spring_strength: 0.10,
            damping: 0.95,
        }
    }
}

#[derive(Debug, Serialize)]
struct VisNode<'a> {
    id: usize,
    label: &'a str,
    title: String,
    color: &'static str,
    size: usize,
}

#[derive(Debug, Serialize)]
struct VisEdge {
    from: usize,
    to: usize,
    value: f32,
}

#[derive(Debug, Serialize)]
struct VisData<'a> {
    nodes: Vec<VisNode<'a>>,
    edges: Vec<VisEdge>,
}

#[derive(Debug, Serialize)]
struct VisPhysics<'a> {
    enabled: bool,
    solver: &'static str,
    repulsion: &'a Physics,
}

#[derive(Debug, Serialize)]
struct VisOptions<'a> {
    physics: VisPhysics<'a>,
}

fn vis_data(sub: &Subgraph) -> VisData<'_> {
    let nodes = sub
        .graph
        .node_indices()
        .map(|idx| {
            let label = sub.graph[idx].as_str();
            let degree = sub.graph.neighbors(idx).count();
            let highlighted = sub.present.contains(label);
            VisNode {
                id: idx.index(),
                label,
                title: format!("{label} ({degree} interactions)"),
                color: if highlighted { INTEREST_COLOR } else { NODE_COLOR },
                size: (BASE_SIZE + SIZE_PER_NEIGHBOUR * degree).min(MAX_SIZE),
            }
        })
        .collect();

    let edges = sub
        .graph
        .raw_edges()
        .iter()
        .map(|e| VisEdge {
            from: e.source().index(),
            to: e.target().index(),
            value: e.weight,
        })
        .collect();

    VisData { nodes, edges }
}

/// JSON for embedding inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render `sub` as a standalone HTML page.
pub fn to_html(sub: &Subgraph, title: &str, physics: &Physics) -> Result<String> {
    let data = script_json(&vis_data(sub))?;
    let options = script_json(&VisOptions {
        physics: VisPhysics {
            enabled: true,
            solver: "repulsion",
            repulsion: physics,
        },
    })?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{VIS_NETWORK_JS}"></script>
<style>
  html, body {{ margin: 0; height: 100%; }}
  #network {{ width: 100%; height: 100%; border: 1px solid lightgray; }}
</style>
</head>
<body>
<div id="network"></div>
<script>
  var data = {data};
  var options = {options};
  var network = new vis.Network(
    document.getElementById("network"),
    {{ nodes: new vis.DataSet(data.nodes), edges: new vis.DataSet(data.edges) }},
    options
  );
</script>
</body>
</html>
"#,
        title = escape_html(title),
    ))
}

/// Write the interactive view of `sub` to `path`.
#[instrument(skip(sub, physics))]
pub fn render_html(sub: &Subgraph, title: &str, physics: &Physics, path: &Path) -> Result<()> {
    let html = to_html(sub, title, physics)?;
    std::fs::write(path, html).map_err(|e| PipelineError::io(path, e))?;
    info!(
        nodes = sub.graph.node_count(),
        edges = sub.graph.edge_count(),
        "wrote interactive view"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::graph_of;
    use crate::subgraph::select;

    fn sample() -> Subgraph {
        let g = graph_of(&[
            ("Kanamycin", "Warfarin"),
            ("Kanamycin", "Furosemide"),
            ("Aspirin", "Ibuprofen"),
        ]);
        select(&g, &["Kanamycin"])
    }

    #[test]
    fn test_html_contains_every_node_and_physics() {
        let html = to_html(&sample(), "Drug Interactions Network", &Physics::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(VIS_NETWORK_JS));
        for name in ["Kanamycin", "Warfarin", "Furosemide"] {
            assert!(html.contains(&format!("\"label\":\"{name}\"")), "{name}");
        }
        assert!(!html.contains("Ibuprofen"));
        assert!(html.contains("\"solver\":\"repulsion\""));
        assert!(html.contains("\"nodeDistance\":420.0"));
        assert!(html.contains("\"springConstant\":0.1"));
    }

    #[test]
    fn test_interest_nodes_are_highlighted_and_sized_by_degree() {
        let sub = sample();
        let data = vis_data(&sub);
        let kanamycin = data.nodes.iter().find(|n| n.label == "Kanamycin").unwrap();
        let warfarin = data.nodes.iter().find(|n| n.label == "Warfarin").unwrap();

        assert_eq!(kanamycin.color, INTEREST_COLOR);
        assert_eq!(warfarin.color, NODE_COLOR);
        assert!(kanamycin.size > warfarin.size);
        assert_eq!(data.edges.len(), 2);
    }

    #[test]
    fn test_labels_cannot_close_the_script() {
        let g = graph_of(&[("</script>", "Kanamycin")]);
        let html = to_html(&select(&g, &["Kanamycin"]), "t", &Physics::default()).unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.html");
        render_html(&sample(), "view", &Physics::default(), &path).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("<title>view</title>"));
    }

    #[test]
    fn test_render_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("view.html");
        let err = render_html(&sample(), "view", &Physics::default(), &path).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
