use anyhow::Result;

use crate::api::EodhdApi;
use crate::app::{calc, fetch, portfolio};

/// Runs one full report: read holdings, fetch quotes, derive metrics,
/// write the output file. Per-symbol problems are warnings on stderr;
/// anything else propagates and aborts before the target is replaced.
pub async fn run(source: &str, target: &str) -> Result<()> {
    let holdings = portfolio::read_portfolio(source)?;

    let api = EodhdApi::new()?;
    let (quotes, failures) = fetch::get_market_data(&api, &holdings).await;
    for failure in &failures {
        eprintln!(
            "Warning: failed to fetch quote for '{}': {}",
            failure.symbol(),
            failure.reason()
        );
    }

    let report = calc::calculate_metrics(&holdings, &quotes)?;
    for symbol in report.unmatched() {
        eprintln!("Warning: no quote for '{}', omitted from report", symbol);
    }

    portfolio::save_portfolio(report.rows(), target)?;

    Ok(())
}
