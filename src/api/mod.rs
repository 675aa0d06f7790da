pub mod eodhd;

pub use eodhd::EodhdApi;
