use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use eventgen_bootstrap::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "eventgen")]
#[command(about = "Generate mock e-commerce event data in nested zip archives", long_about = None)]
struct Args {
    /// Number of weeks (weekly zip files) to generate
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Directory to save the weekly zip files [default: data]
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Start date of the first week, YYYY-MM-DD [default: 2023-10-23]
    #[arg(short, long)]
    start_date: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let options = RunOptions {
        count: args.count,
        output_dir: args.output_dir,
        start_date: args.start_date,
        seed: args.seed,
        config: args.config,
    };

    eventgen_bootstrap::run(options).await?;
    Ok(())
}
