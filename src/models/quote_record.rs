use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Latest price fetched for one holding, tagged with the holding's
/// position in the input sequence and its symbol. Records are not
/// guaranteed to be complete or in holdings order.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct QuoteRecord {
    original_index: usize,
    symbol: String,
    price: Decimal,
}

/// A per-symbol fetch failure. The fetcher returns these to the caller
/// instead of printing them; the boundary decides how to present them.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct FetchFailure {
    symbol: String,
    reason: String,
}
