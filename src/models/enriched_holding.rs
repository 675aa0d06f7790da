use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One output row: the holding plus its derived metrics. The serde
/// field names are the exact output CSV header, in this order.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct EnrichedHolding {
    symbol: String,
    units: i64,
    cost: Decimal,
    #[serde(rename = "latest-price")]
    latest_price: Decimal,
    book_value: Decimal,
    market_value: Decimal,
    gain_loss: Decimal,
    change: Decimal,
}
