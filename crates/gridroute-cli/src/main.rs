use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridroute_cli::commands::edges::handle_edges_command;
use gridroute_cli::commands::load_network;
use gridroute_cli::commands::route::{handle_route_command, RouteCommandArgs};
use gridroute_cli::commands::session::run_session;
use gridroute_cli::commands::vertices::handle_vertices_command;
use gridroute_cli::output::{OutputFormat, TextStyle};

#[derive(Parser, Debug)]
#[command(author, version, about = "Distribution-network routing and outage simulation")]
struct Cli {
    /// Edge-list file (overrides GRIDROUTE_GRAPH; defaults to ./data.txt).
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every vertex in ascending order.
    Vertices,
    /// Compute the cheapest route between two vertices.
    Route {
        /// Starting vertex name.
        #[arg(long = "from")]
        from: String,
        /// Destination vertex name.
        #[arg(long = "to")]
        to: String,
        /// Mark a vertex out of service before routing (repeatable).
        #[arg(long = "broken", value_name = "VERTEX")]
        broken: Vec<String>,
        /// Ignore outages and report the theoretical route.
        #[arg(long)]
        diagnostic: bool,
        /// Fail on endpoints that are not in the network.
        #[arg(long)]
        strict: bool,
    },
    /// List outgoing edges.
    Edges {
        /// Only show edges leaving this vertex.
        #[arg(long = "from")]
        from: Option<String>,
    },
    /// Read outage and routing commands from stdin.
    Session,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = load_network(cli.graph.as_deref())?;
    let style = TextStyle::detect(cli.no_color);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Vertices => handle_vertices_command(&mut out, &network, cli.format)?,
        Command::Route {
            from,
            to,
            broken,
            diagnostic,
            strict,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                broken,
                diagnostic,
                strict,
            };
            handle_route_command(&mut out, &network, &args, cli.format, &style)?;
        }
        Command::Edges { from } => {
            handle_edges_command(&mut out, &network, from.as_deref(), cli.format)?
        }
        Command::Session => {
            let stdin = io::stdin();
            run_session(&network, stdin.lock(), &mut out, cli.format, &style)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
