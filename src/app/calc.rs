use std::collections::HashMap;

use derive_getters::Getters;
use rust_decimal::Decimal;

use crate::error::{ReportError, Result};
use crate::models::{EnrichedHolding, Holding, QuoteRecord};

/// Result of one metrics run: the enriched rows in holdings order, plus
/// the symbols that had no quote and were omitted. Presentation of the
/// omissions is left to the caller.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct MetricsReport {
    rows: Vec<EnrichedHolding>,
    unmatched: Vec<String>,
}

/// Aligns quote records to holdings by symbol and derives the metrics
/// for each matched holding.
///
/// Alignment goes through a symbol-to-price map built from all quote
/// records up front, so it is insensitive to quote ordering and to gaps
/// left by failed fetches. The first record per symbol wins. A holding
/// whose symbol never appears is omitted from the rows and recorded in
/// `unmatched`; it never gets a fabricated price.
pub fn calculate_metrics(holdings: &[Holding], quotes: &[QuoteRecord]) -> Result<MetricsReport> {
    let mut prices: HashMap<&str, Decimal> = HashMap::new();
    for quote in quotes {
        prices.entry(quote.symbol()).or_insert(*quote.price());
    }

    let mut rows = Vec::new();
    let mut unmatched = Vec::new();

    for holding in holdings {
        let Some(price) = prices.get(holding.symbol().as_str()) else {
            unmatched.push(holding.symbol().clone());
            continue;
        };

        let units = Decimal::from(*holding.units());
        let book_value = holding.cost() * units;
        let market_value = price * units;
        let gain_loss = market_value - book_value;

        if book_value == Decimal::ZERO {
            return Err(ReportError::InvalidInput {
                symbol: holding.symbol().clone(),
                detail: String::from("book value is zero, change is undefined"),
            });
        }

        let change = (market_value / book_value * Decimal::from(100)).round_dp(2);

        rows.push(EnrichedHolding::new(
            holding.symbol().clone(),
            *holding.units(),
            *holding.cost(),
            *price,
            book_value,
            market_value,
            gain_loss,
            change,
        ));
    }

    Ok(MetricsReport { rows, unmatched })
}
