//! Readers for the two tabular inputs: the interaction list and the
//! DrugBank ID lookup.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::error::{PipelineError, Result};

/// One row of the interaction file, still in raw DrugBank codes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEdge {
    pub drug1: String,
    pub drug2: String,
}

impl RawEdge {
    pub fn new(drug1: impl Into<String>, drug2: impl Into<String>) -> Self {
        Self {
            drug1: drug1.into(),
            drug2: drug2.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LookupRow {
    #[serde(rename = "DrugBank ID")]
    id: String,
    #[serde(rename = "Common name")]
    name: Option<String>,
}

/// Raw code to display name mapping. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    names: HashMap<String, String>,
}

impl Lookup {
    /// Display name for `code`, if the lookup knows it.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Lookup {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| PipelineError::io(path, e))
}

/// Read the tab-separated, headerless two-column interaction list.
#[instrument]
pub fn read_interactions(path: &Path) -> Result<Vec<RawEdge>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(open(path)?);

    let mut edges = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| PipelineError::csv(path, e))?;
        if record.len() != 2 {
            return Err(PipelineError::Columns {
                path: path.to_path_buf(),
                line: record.position().map_or(0, |p| p.line()),
                found: record.len(),
            });
        }
        let edge: RawEdge = record
            .deserialize(None)
            .map_err(|e| PipelineError::csv(path, e))?;
        edges.push(edge);
    }

    info!(rows = edges.len(), "loaded interactions");
    Ok(edges)
}

/// Read the comma-separated lookup file. Rows without a name are skipped and
/// a repeated ID keeps its last name.
#[instrument]
pub fn read_lookup(path: &Path) -> Result<Lookup> {
    let mut reader = csv::Reader::from_reader(open(path)?);

    let mut names = HashMap::new();
    for row in reader.deserialize() {
        let row: LookupRow = row.map_err(|e| PipelineError::csv(path, e))?;
        match row.name.filter(|n| !n.trim().is_empty()) {
            Some(name) => {
                names.insert(row.id, name);
            }
            None => debug!(id = %row.id, "lookup row has no name"),
        }
    }

    info!(entries = names.len(), "loaded lookup table");
    Ok(Lookup { names })
}
