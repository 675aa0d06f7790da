use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{FetchFailure, Holding, QuoteRecord};

/// The seam to the external quote provider: one query per symbol.
#[allow(async_fn_in_trait)]
pub trait QuoteSource {
    async fn last_close(&self, symbol: &str) -> Result<Decimal>;
}

/// Fetches the latest price for every holding, one call per symbol, in
/// input order. A failed fetch produces a `FetchFailure` and no quote
/// record; it never stops the remaining symbols and never substitutes a
/// placeholder price. Callers must not rely on the records being in
/// holdings order.
pub async fn get_market_data<S: QuoteSource>(
    source: &S,
    holdings: &[Holding],
) -> (Vec<QuoteRecord>, Vec<FetchFailure>) {
    let mut records = Vec::new();
    let mut failures = Vec::new();

    for (idx, holding) in holdings.iter().enumerate() {
        match source.last_close(holding.symbol()).await {
            Ok(price) => {
                records.push(QuoteRecord::new(idx, holding.symbol().clone(), price));
            }
            Err(err) => {
                failures.push(FetchFailure::new(holding.symbol().clone(), err.to_string()));
            }
        }
    }

    (records, failures)
}
