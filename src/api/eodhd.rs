use std::time::Duration;

use anyhow::{Error, Result};
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::app::fetch::QuoteSource;

const BASE_URL: &str = "https://eodhd.com/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// EODHD end-of-day quote client. The free tier only supports one
/// symbol per call, so there is no batch endpoint here.
#[derive(Clone, Debug)]
pub struct EodhdApi {
    client: Client,
    base_url: String,
    api_token: String,
}

impl EodhdApi {
    pub fn new() -> Result<Self> {
        let api_token =
            std::env::var("EODHD_API_TOKEN").unwrap_or_else(|_| String::from("demo"));
        Self::with_base_url(BASE_URL, api_token)
    }

    pub fn with_base_url(base_url: &str, api_token: String) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_token,
        })
    }

    pub fn quote_url(&self, symbol: &str) -> String {
        format!(
            "{}/eod/{}?filter=last_close&api_token={}&fmt=json",
            self.base_url, symbol, self.api_token
        )
    }

    /// Fetches the latest close for one symbol. The endpoint returns a
    /// bare numeric body; the price is parsed from the literal text so
    /// the decimal scale survives untouched.
    async fn fetch_last_close(&self, symbol: &str) -> Result<Decimal> {
        let url = self.quote_url(symbol);
        let res = self.client.get(&url).send().await?;

        if !res.status().is_success() {
            return Err(Error::msg(format!("Request failed: {}", res.status())));
        }

        let text = res.text().await?;
        let body = text.trim();

        match serde_json::from_str::<Value>(body)? {
            Value::Number(_) => body
                .parse::<Decimal>()
                .map_err(|e| Error::msg(format!("Failed to parse price '{}': {}", body, e))),
            Value::String(price) => price
                .parse::<Decimal>()
                .map_err(|e| Error::msg(format!("Failed to parse price '{}': {}", price, e))),
            other => Err(Error::msg(format!("Unexpected API response: {}", other))),
        }
    }
}

impl QuoteSource for EodhdApi {
    async fn last_close(&self, symbol: &str) -> Result<Decimal> {
        self.fetch_last_close(symbol).await
    }
}
