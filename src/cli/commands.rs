//! CLI command definitions for flight-filter.
//!
//! One run: load flights from a source, qualify them against the standard
//! rule set, write the surviving flights as a JSON artifact.

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;

use crate::export;
use crate::qualify::{qualify_flights, Rule};
use crate::source;

/// Default output path for the result artifact.
const DEFAULT_OUTPUT: &str = "result/result.json";

/// Itinerary validity filter for flight schedules.
#[derive(Parser)]
#[command(name = "flight-filter")]
#[command(about = "Filter out flights that violate itinerary validity rules")]
#[command(version)]
#[command(
    long_about = "flight-filter qualifies flights against three fixed rules: departure in the past, a segment arriving before its own departure, and more than two hours on the ground between segments.\n\nQualifying flights are written as a JSON artifact for downstream review.\n\nExample usage:\n  flight-filter filter --input flights.json --output result/result.json --pretty"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Run the qualification pipeline and write the surviving flights.
    #[command(alias = "run")]
    Filter(FilterArgs),

    /// Print the built-in fixture flights as a JSON document.
    Fixtures(FixturesArgs),
}

/// Arguments for `flight-filter filter`.
#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// JSON flight document to filter ({"flights": [...]}).
    /// The built-in fixture flights are used when omitted.
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output path for the result artifact.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Pretty-print the result artifact.
    #[arg(long)]
    pub pretty: bool,

    /// Do not echo the result document to stdout.
    #[arg(short, long)]
    pub quiet: bool,

    /// Reference instant (RFC 3339) for the past-departure rule.
    /// The current time is captured when omitted.
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

/// Arguments for `flight-filter fixtures`.
#[derive(Parser, Debug)]
pub struct FixturesArgs {
    /// Pretty-print the document.
    #[arg(long)]
    pub pretty: bool,
}

/// Parses CLI arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Runs the subcommand of an already-parsed CLI invocation.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Filter(args) => run_filter(args),
        Commands::Fixtures(args) => run_fixtures(args),
    }
}

fn run_filter(args: FilterArgs) -> anyhow::Result<()> {
    // One reference instant per run: rule construction and fixture building
    // both derive from it, so a run cannot straddle a time boundary.
    let now = args.now.unwrap_or_else(Utc::now);

    let flights = match &args.input {
        Some(path) => {
            info!(input = %path, "loading flights from document");
            source::load_flights(path)?
        }
        None => {
            info!("no input document given, using fixture flights");
            source::fixture_flights(now)
        }
    };
    info!(flights = flights.len(), reference = %now, "flights loaded");

    let retained = qualify_flights(&Rule::standard(now), flights)?;

    export::write_result(&retained, &args.output, args.pretty)?;
    if !args.quiet {
        println!("{}", export::render_result(&retained, args.pretty)?);
    }

    Ok(())
}

fn run_fixtures(args: FixturesArgs) -> anyhow::Result<()> {
    let flights = source::fixture_flights(Utc::now());
    println!("{}", export::render_result(&flights, args.pretty)?);

    Ok(())
}
