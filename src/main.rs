//! Command line front end for the ferroroute transit router.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod matrix;
mod model;
mod routing;

use error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "ferroroute",
    author,
    version,
    about = "Best routes between stations of a transit network",
    long_about = "Builds a transit network from a TOML or JSON description (or the built-in \
                  TransMilenio sample) and finds the best route between two stations by \
                  travel time, planar distance or number of transfers."
)]
struct Args {
    /// Network description file (.toml or .json). Defaults to the built-in network
    #[arg(short, long, global = true)]
    network: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `ferroroute_core=trace`. Overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the best route between two stations
    Route {
        from: String,
        to: String,
        /// One of: time, distance, transfers
        #[arg(short, long, default_value = "time")]
        criterion: String,
        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the stations of the network
    Stations {
        #[arg(long)]
        json: bool,
    },
    /// Print the cost between every pair of stations
    Matrix {
        #[arg(short, long, default_value = "time")]
        criterion: String,
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<String, CliError> {
    let network = model::load_network(args.network.as_deref())?;

    match args.command {
        Command::Route {
            from,
            to,
            criterion,
            json,
        } => routing::route(&network, &from, &to, &criterion, json),
        Command::Stations { json } => model::render_stations(&network, json),
        Command::Matrix { criterion, json } => matrix::matrix(&network, &criterion, json),
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    match run(args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
