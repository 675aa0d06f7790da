use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One portfolio line item as read from the input CSV.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct Holding {
    symbol: String,
    units: i64,
    cost: Decimal,
}
