use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfind_lib::{load_query, plan_route, write_route, RouteSummary};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compute a route between two named locations using pluggable search strategies"
)]
struct Cli {
    /// Query file describing the algorithm, endpoints, edges, and estimates.
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,

    /// Destination file for the computed route.
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Override the algorithm named in the query file (BFS, DFS, UCS, A*).
    #[arg(long)]
    algorithm: Option<String>,

    /// Presentation used for the stdout summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let mut query = load_query(&cli.input)
        .with_context(|| format!("failed to load query from {}", cli.input.display()))?;

    if let Some(name) = &cli.algorithm {
        query.algorithm = name.parse()?;
    }

    let route = plan_route(&query)?;

    write_route(&cli.output, &route)
        .with_context(|| format!("failed to write route to {}", cli.output.display()))?;

    let summary = RouteSummary::new(query.algorithm, &route);
    match cli.format {
        OutputFormat::Text => print!("{}", summary.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
