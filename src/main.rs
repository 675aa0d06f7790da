use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;

use portfolio_report::app::report;

/// Generates a performance report for a stock portfolio.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input CSV file with header symbol,units,cost
    source: String,
    /// Output CSV file for the enriched rows
    target: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();
    report::run(&args.source, &args.target).await?;

    Ok(())
}
