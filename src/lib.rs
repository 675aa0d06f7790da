pub mod api;
pub mod app;
pub mod error;
pub mod models;

#[cfg(test)]
mod test;
