//! Route command handler.

use std::io::Write;

use anyhow::Result;

use gridroute_lib::{validate_endpoints, GridNetwork, RouteMode, RouteSummary};

use crate::output::{render_json, render_route_text, OutputFormat, TextStyle};

/// Arguments for the route command.
#[derive(Debug, Clone, Default)]
pub struct RouteCommandArgs {
    /// Starting vertex name.
    pub from: String,
    /// Destination vertex name.
    pub to: String,
    /// Vertices to mark out of service before routing.
    pub broken: Vec<String>,
    /// Ignore outages entirely.
    pub diagnostic: bool,
    /// Reject endpoints that are not in the graph.
    pub strict: bool,
}

/// Build the summary for one route request against `network`.
///
/// Outages named in `args.broken` are applied to the network first. A normal
/// query that finds nothing falls back to a diagnostic explanation.
pub fn plan_route(network: &GridNetwork, args: &RouteCommandArgs) -> Result<RouteSummary> {
    let graph = network.graph();
    validate_endpoints(graph, &args.from, &args.to, args.strict)?;

    for vertex in &args.broken {
        if !graph.contains(vertex) {
            tracing::warn!(%vertex, "marking a vertex that is not in the network");
        }
        network.set_broken(vertex, true);
    }

    let summary = if args.diagnostic {
        let route = network.find_shortest_path(&args.from, &args.to, args.diagnostic);
        let mode = RouteMode::from_ignore_availability(args.diagnostic);
        RouteSummary::from_path(graph, &args.from, &args.to, mode, &route)
    } else {
        let diagnosis = network.diagnose(&args.from, &args.to);
        RouteSummary::from_diagnosis(graph, &args.from, &args.to, &diagnosis)
    };
    tracing::debug!(status = %summary.status, hops = summary.hops, "route planned");
    Ok(summary)
}

/// Handle the route subcommand.
pub fn handle_route_command<W: Write>(
    out: &mut W,
    network: &GridNetwork,
    args: &RouteCommandArgs,
    format: OutputFormat,
    style: &TextStyle,
) -> Result<()> {
    let summary = plan_route(network, args)?;
    match format {
        OutputFormat::Text => render_route_text(out, &summary, style)?,
        OutputFormat::Json => render_json(out, &summary)?,
    }
    Ok(())
}
