//! Edge-list loading.
//!
//! Sources are plain text with one `source,destination,weight` edge per line.
//! Anything that does not look like an edge is treated as noise and skipped:
//! blank lines, bracketed metadata lines, lines with the wrong number of
//! fields, and weights that are not finite numbers. Only a missing or
//! unreadable source is an error.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Outcome counters for a single load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Edges appended to the graph.
    pub edges: usize,
    /// Non-blank lines that were ignored.
    pub skipped: usize,
}

/// Why a line was not turned into an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Metadata,
    FieldCount(usize),
    InvalidWeight,
    InvalidEncoding,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Blank => f.write_str("blank line"),
            SkipReason::Metadata => f.write_str("bracketed metadata"),
            SkipReason::FieldCount(count) => write!(f, "expected 3 fields, found {count}"),
            SkipReason::InvalidWeight => f.write_str("weight is not a finite number"),
            SkipReason::InvalidEncoding => f.write_str("line is not valid UTF-8"),
        }
    }
}

/// Load a graph from an edge-list file.
pub fn load_graph(path: &Path) -> Result<Graph> {
    load_graph_with_report(path).map(|(graph, _)| graph)
}

/// Load a graph from an edge-list file and report how many lines were used.
pub fn load_graph_with_report(path: &Path) -> Result<(Graph, LoadReport)> {
    if !path.exists() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = fs::File::open(path)?;
    let (graph, report) = load_graph_from_reader(file)?;
    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = report.edges,
        skipped = report.skipped,
        "loaded edge list"
    );
    Ok((graph, report))
}

/// Build a fresh graph from any line source.
pub fn load_graph_from_reader<R: Read>(reader: R) -> Result<(Graph, LoadReport)> {
    let mut graph = Graph::new();
    let report = extend_graph_from_reader(&mut graph, reader)?;
    Ok((graph, report))
}

/// Append every well-formed edge in `reader` to an existing graph.
///
/// On an I/O failure the graph keeps the edges read so far, but the error is
/// always returned to the caller.
pub fn extend_graph_from_reader<R: Read>(graph: &mut Graph, reader: R) -> Result<LoadReport> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut report = LoadReport::default();
    let mut record = StringRecord::new();

    loop {
        match csv_reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => match parse_edge(&record) {
                Ok((source, destination, weight)) => {
                    graph.add_edge(source, destination, weight);
                    report.edges += 1;
                }
                Err(SkipReason::Blank) => {}
                Err(reason) => {
                    let line = record.position().map(|pos| pos.line());
                    debug!(?line, %reason, "skipping edge-list line");
                    report.skipped += 1;
                }
            },
            Err(err) => match err.kind() {
                csv::ErrorKind::Utf8 { .. } => {
                    let line = err.position().map(|pos| pos.line());
                    debug!(?line, reason = %SkipReason::InvalidEncoding, "skipping edge-list line");
                    report.skipped += 1;
                }
                _ => return Err(err.into()),
            },
        }
    }

    Ok(report)
}

/// Interpret one raw record as `source,destination,weight`.
///
/// Trailing empty fields do not count, so `A,B,1,` is a valid edge while
/// `A,B,1, ` is not. Fields are trimmed after counting.
pub fn parse_edge(record: &StringRecord) -> std::result::Result<(&str, &str, f64), SkipReason> {
    let first = record.get(0).unwrap_or_default().trim();
    if record.len() <= 1 && first.is_empty() {
        return Err(SkipReason::Blank);
    }
    if first.starts_with('[') {
        return Err(SkipReason::Metadata);
    }

    let field_count = record
        .iter()
        .rev()
        .skip_while(|field| field.is_empty())
        .count();
    if field_count != 3 {
        return Err(SkipReason::FieldCount(field_count));
    }

    let weight = record[2]
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|weight| weight.is_finite())
        .ok_or(SkipReason::InvalidWeight)?;

    Ok((first, record[1].trim(), weight))
}
