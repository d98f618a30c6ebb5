use std::io::Write;

use anyhow::Result;

use gridroute_lib::{fuzzy_vertex_matches, list_vertices, Error as GridError, GridNetwork};

use crate::output::{render_edges_text, render_json, EdgeRow, OutputFormat};

/// List outgoing edges, either for one source vertex or for the whole graph.
///
/// Sources are visited in ascending name order; each source's edges keep
/// their load order.
pub fn handle_edges_command<W: Write>(
    out: &mut W,
    network: &GridNetwork,
    from: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let graph = network.graph();
    let sources = match from {
        Some(name) if !graph.contains(name) => {
            return Err(GridError::UnknownVertex {
                name: name.to_string(),
                suggestions: fuzzy_vertex_matches(graph, name, 3),
            }
            .into());
        }
        Some(name) => vec![name.to_string()],
        None => list_vertices(graph),
    };

    let rows: Vec<EdgeRow> = sources
        .iter()
        .flat_map(|source| {
            graph.edges_from(source).map(move |(target, weight)| EdgeRow {
                source: source.clone(),
                target: target.to_string(),
                weight,
            })
        })
        .collect();

    match format {
        OutputFormat::Text => render_edges_text(out, &rows)?,
        OutputFormat::Json => render_json(out, &rows)?,
    }
    Ok(())
}
