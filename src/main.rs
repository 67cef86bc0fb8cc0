use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use top_agents::{find_top_agents, queries, report, FinderConfig};

#[derive(Parser, Debug)]
#[command(
    name = "top-agents",
    version,
    about = "Find the top real estate agents/teams in a given area"
)]
struct Cli {
    /// Area to search (e.g. "pittsburgh pa")
    area: String,

    /// Number of top agent/team pages to report
    #[arg(short = 'n', long = "top", default_value_t = 5)]
    top: usize,

    /// Number of search results to retrieve per query
    #[arg(short = 'r', long = "results", default_value_t = 50)]
    results: usize,

    /// Region code passed to the search provider
    #[arg(long, default_value = "us")]
    region: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = FinderConfig {
        top_count: cli.top,
        results_per_query: cli.results,
        region: cli.region,
        timeout_seconds: cli.timeout,
        ..Default::default()
    };

    let ranked = find_top_agents(&cli.area, &config).await?;

    let num_queries = queries::build_queries(&cli.area).len();
    print!("{}", report::render_report(&ranked, config.top_count, num_queries));
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
