use std::io::Write;

use anyhow::Result;

use gridroute_lib::GridNetwork;

use crate::output::{render_json, render_vertices_text, OutputFormat};

/// Print every vertex name in ascending order.
pub fn handle_vertices_command<W: Write>(
    out: &mut W,
    network: &GridNetwork,
    format: OutputFormat,
) -> Result<()> {
    let names = network.list_vertices();
    match format {
        OutputFormat::Text => render_vertices_text(out, &names)?,
        OutputFormat::Json => render_json(out, &names)?,
    }
    Ok(())
}
