//! Line-oriented outage simulation over stdin.
//!
//! Every command in a session runs against the same [`GridNetwork`], so
//! outages persist between queries. Commands that name two vertices take
//! them separated by a comma (`route Main Plant, Campus Gate`); two
//! single-word names may also be separated by whitespace (`route A B`).

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Result};
use serde::Serialize;

use gridroute_lib::{validate_endpoints, GridNetwork, RouteMode, RouteSummary};

use crate::output::{render_json_line, render_route_text, OutputFormat, TextStyle};

const HELP: &[&str] = &[
    "break <vertex>",
    "restore <vertex>",
    "toggle <vertex>",
    "status <vertex>",
    "route <from>, <to>",
    "diagnose <from>, <to>",
    "list",
    "outages",
    "help",
    "quit",
];

/// A parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Break(String),
    Restore(String),
    Toggle(String),
    Status(String),
    Route { from: String, to: String },
    Diagnose { from: String, to: String },
    List,
    Outages,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "break" => SessionCommand::Break(one_vertex(verb, rest)?),
            "restore" => SessionCommand::Restore(one_vertex(verb, rest)?),
            "toggle" => SessionCommand::Toggle(one_vertex(verb, rest)?),
            "status" => SessionCommand::Status(one_vertex(verb, rest)?),
            "route" => {
                let (from, to) = two_vertices(verb, rest)?;
                SessionCommand::Route { from, to }
            }
            "diagnose" => {
                let (from, to) = two_vertices(verb, rest)?;
                SessionCommand::Diagnose { from, to }
            }
            "list" => SessionCommand::List,
            "outages" => SessionCommand::Outages,
            "help" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => bail!("unknown command '{verb}' (try 'help')"),
        };
        Ok(Some(command))
    }
}

fn one_vertex(verb: &str, rest: &str) -> Result<String> {
    if rest.is_empty() {
        bail!("'{verb}' needs a vertex name");
    }
    Ok(rest.to_string())
}

fn two_vertices(verb: &str, rest: &str) -> Result<(String, String)> {
    let pair = match rest.split_once(',') {
        Some((from, to)) => Some((from.trim(), to.trim())),
        None => {
            let mut words = rest.split_whitespace();
            match (words.next(), words.next(), words.next()) {
                (Some(from), Some(to), None) => Some((from, to)),
                _ => None,
            }
        }
    };
    match pair {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(anyhow!("'{verb}' needs two vertex names: {verb} <from>, <to>")),
    }
}

#[derive(Debug, Serialize)]
struct VertexState {
    name: String,
    broken: bool,
}

/// Response to one session command.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Reply {
    Availability {
        vertex: String,
        broken: bool,
        known: bool,
    },
    Route(RouteSummary),
    Vertices {
        vertices: Vec<VertexState>,
    },
    Outages {
        broken: Vec<String>,
    },
    Help {
        commands: Vec<&'static str>,
    },
    Error {
        message: String,
    },
}

/// Run commands from `input` until it is exhausted or `quit` is read.
///
/// Bad commands produce an error reply and the session continues; only I/O
/// failures end it early.
pub fn run_session<R: BufRead, W: Write>(
    network: &GridNetwork,
    input: R,
    out: &mut W,
    format: OutputFormat,
    style: &TextStyle,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let reply = match SessionCommand::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => match execute(network, command) {
                Some(reply) => reply,
                None => break,
            },
            Err(err) => Reply::Error {
                message: err.to_string(),
            },
        };
        match format {
            OutputFormat::Text => write_text(out, &reply, style)?,
            OutputFormat::Json => render_json_line(out, &reply)?,
        }
        out.flush()?;
    }
    tracing::debug!(broken = ?network.broken_vertices(), "session finished");
    Ok(())
}

/// Apply one command; `None` ends the session.
fn execute(network: &GridNetwork, command: SessionCommand) -> Option<Reply> {
    let availability = |vertex: String, broken: bool| Reply::Availability {
        known: network.graph().contains(&vertex),
        vertex,
        broken,
    };

    let reply = match command {
        SessionCommand::Break(vertex) => {
            network.set_broken(&vertex, true);
            availability(vertex, true)
        }
        SessionCommand::Restore(vertex) => {
            network.set_broken(&vertex, false);
            availability(vertex, false)
        }
        SessionCommand::Toggle(vertex) => {
            let broken = network.toggle(&vertex);
            availability(vertex, broken)
        }
        SessionCommand::Status(vertex) => {
            let broken = network.is_broken(&vertex);
            availability(vertex, broken)
        }
        SessionCommand::Route { from, to } => route_reply(network, &from, &to, false),
        SessionCommand::Diagnose { from, to } => route_reply(network, &from, &to, true),
        SessionCommand::List => {
            let broken = network.broken_vertices();
            Reply::Vertices {
                vertices: network
                    .list_vertices()
                    .into_iter()
                    .map(|name| VertexState {
                        broken: broken.binary_search(&name).is_ok(),
                        name,
                    })
                    .collect(),
            }
        }
        SessionCommand::Outages => Reply::Outages {
            broken: network.broken_vertices(),
        },
        SessionCommand::Help => Reply::Help {
            commands: HELP.to_vec(),
        },
        SessionCommand::Quit => return None,
    };
    Some(reply)
}

fn route_reply(network: &GridNetwork, from: &str, to: &str, diagnose: bool) -> Reply {
    let graph = network.graph();
    if let Err(err) = validate_endpoints(graph, from, to, false) {
        return Reply::Error {
            message: err.to_string(),
        };
    }
    let summary = if diagnose {
        RouteSummary::from_diagnosis(graph, from, to, &network.diagnose(from, to))
    } else {
        let route = network.find_shortest_path(from, to, false);
        RouteSummary::from_path(graph, from, to, RouteMode::Normal, &route)
    };
    Reply::Route(summary)
}

fn write_text<W: Write>(out: &mut W, reply: &Reply, style: &TextStyle) -> Result<()> {
    let p = &style.palette;
    match reply {
        Reply::Availability {
            vertex,
            broken,
            known,
        } => {
            let state = if *broken {
                format!("{}out of service{}", p.red, p.reset)
            } else {
                format!("{}in service{}", p.green, p.reset)
            };
            let note = if *known { "" } else { " (not in network)" };
            writeln!(out, "{vertex}: {state}{note}")?;
        }
        Reply::Route(summary) => render_route_text(out, summary, style)?,
        Reply::Vertices { vertices } => {
            for vertex in vertices {
                if vertex.broken {
                    writeln!(out, "{} {}[out of service]{}", vertex.name, p.red, p.reset)?;
                } else {
                    writeln!(out, "{}", vertex.name)?;
                }
            }
        }
        Reply::Outages { broken } if broken.is_empty() => writeln!(out, "no outages")?,
        Reply::Outages { broken } => writeln!(out, "out of service: {}", broken.join(", "))?,
        Reply::Help { commands } => {
            for command in commands {
                writeln!(out, "  {command}")?;
            }
        }
        Reply::Error { message } => writeln!(out, "{}error: {message}{}", p.red, p.reset)?,
    }
    Ok(())
}
