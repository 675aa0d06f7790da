use thiserror::Error;

/// Failures that abort the report run. Per-symbol fetch and alignment
/// problems are not in here; they are reported as data and skipped
/// (see `app::fetch::FetchFailure` and `app::calc::MetricsReport`).
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Malformed input in '{path}': {detail}")]
    MalformedInput { path: String, detail: String },

    #[error("Invalid holding '{symbol}': {detail}")]
    InvalidInput { symbol: String, detail: String },

    #[error("Failed to write output file '{path}': {detail}")]
    OutputWrite { path: String, detail: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
