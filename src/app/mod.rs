pub mod calc;
pub mod fetch;
pub mod portfolio;
pub mod report;

pub use calc::{MetricsReport, calculate_metrics};
pub use fetch::{QuoteSource, get_market_data};
pub use portfolio::{read_portfolio, save_portfolio};
