//! Subcommand handlers. `main.rs` parses arguments and dispatches here.

pub mod edges;
pub mod route;
pub mod session;
pub mod vertices;

use std::path::Path;

use anyhow::{Context, Result};

use gridroute_lib::{load_graph_with_report, resolve_graph_path, GridNetwork};

/// Resolve the edge-list location and load it into a shared network.
pub fn load_network(graph_override: Option<&Path>) -> Result<GridNetwork> {
    let path = resolve_graph_path(graph_override);
    let (graph, report) = load_graph_with_report(&path)
        .with_context(|| format!("failed to load network from {}", path.display()))?;
    if report.skipped > 0 {
        tracing::warn!(
            skipped = report.skipped,
            path = %path.display(),
            "ignored malformed lines in edge list"
        );
    }
    Ok(GridNetwork::new(graph))
}
