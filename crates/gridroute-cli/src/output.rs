//! Output formatting for route summaries and graph listings.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use gridroute_lib::{RouteMode, RouteStatus, RouteStep, RouteSummary};

use crate::terminal::{ColorPalette, TreeGlyphs};

/// Output format shared by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

/// Styling choices for text output.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub palette: ColorPalette,
    pub glyphs: TreeGlyphs,
}

impl TextStyle {
    /// Detect colors and glyphs from the environment.
    pub fn detect(no_color: bool) -> Self {
        Self {
            palette: if no_color {
                ColorPalette::plain()
            } else {
                ColorPalette::detect()
            },
            glyphs: TreeGlyphs::detect(),
        }
    }

    pub const fn plain_ascii() -> Self {
        Self {
            palette: ColorPalette::plain(),
            glyphs: TreeGlyphs::ASCII,
        }
    }
}

/// One adjacency entry in the `edges` listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRow {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Write `value` as pretty JSON followed by a newline.
pub fn render_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Write `value` as a single JSON line.
pub fn render_json_line<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

pub fn render_vertices_text<W: Write>(out: &mut W, names: &[String]) -> io::Result<()> {
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

pub fn render_edges_text<W: Write>(out: &mut W, rows: &[EdgeRow]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{} -> {} ({})", row.source, row.target, row.weight)?;
    }
    Ok(())
}

/// Render a route summary as a tree.
///
/// Routed queries print the path and total cost. Blocked queries print a
/// headline, then the theoretical route with its out-of-service vertices
/// flagged. Unreachable queries print only the headline.
pub fn render_route_text<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    style: &TextStyle,
) -> io::Result<()> {
    let p = &style.palette;
    match summary.status {
        RouteStatus::Routed => {
            let mode = match summary.mode {
                RouteMode::Normal => "",
                RouteMode::Diagnostic => "; diagnostic mode",
            };
            writeln!(
                out,
                "Route from {}{}{} to {}{}{} ({} hops{}):",
                p.white_bold, summary.start, p.reset, p.white_bold, summary.goal, p.reset,
                summary.hops, mode
            )?;
        }
        RouteStatus::BlockedByOutage => {
            writeln!(
                out,
                "{}No route from {} to {}: {}{}",
                p.red, summary.start, summary.goal, summary.status, p.reset
            )?;
            writeln!(
                out,
                "Theoretical route ignoring outages ({} hops):",
                summary.hops
            )?;
        }
        RouteStatus::Unreachable => {
            return writeln!(
                out,
                "{}No route from {} to {}: {}{}",
                p.red, summary.start, summary.goal, summary.status, p.reset
            );
        }
    }

    let len = summary.steps.len();
    for step in &summary.steps {
        render_step(out, step, style.glyphs.for_position(step.index, len), p)?;
    }

    writeln!(out)?;
    writeln!(out, "Total cost: {:.2}", summary.total_cost)?;
    if !summary.broken_on_route.is_empty() {
        writeln!(
            out,
            "{}Out of service on route: {}{}",
            p.yellow,
            summary.broken_on_route.join(", "),
            p.reset
        )?;
    }
    Ok(())
}

fn render_step<W: Write>(
    out: &mut W,
    step: &RouteStep,
    glyph: &str,
    p: &ColorPalette,
) -> io::Result<()> {
    write!(out, "{}{}{} {}{}{}", p.gray, glyph, p.reset, p.white_bold, step.name, p.reset)?;
    if let Some(distance) = step.distance {
        write!(
            out,
            " {}(+{:.2}, {:.2}){}",
            p.gray, distance, step.cumulative, p.reset
        )?;
    }
    if step.broken {
        write!(out, " {}[out of service]{}", p.red, p.reset)?;
    }
    writeln!(out)
}
