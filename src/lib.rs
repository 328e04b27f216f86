//! Drug-drug interaction network analysis.
//!
//! Loads the ChCh-Miner interaction list, swaps DrugBank IDs for common
//! names, ranks drugs by centrality and renders the neighbourhood of a few
//! drugs of interest as an interactive page.
//!
//! # Conventions
//!
//! - **Errors**: stage functions return [`error::Result`].
//! - **Logging**: `tracing` macros, written to stderr; stdout carries the report.

pub mod config;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod network;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod subgraph;
