pub mod enriched_holding;
pub mod holding;
pub mod quote_record;

pub use enriched_holding::EnrichedHolding;
pub use holding::Holding;
pub use quote_record::{FetchFailure, QuoteRecord};
