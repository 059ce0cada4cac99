//! # Cart Pricing Client
//!
//! HTTP adapter for the cart's price-lookup port.
//!
//! The pricing service exposes one document per product at
//! `{base_url}/{product}.json`, each a JSON object carrying a numeric
//! `price` field. This client fetches that document with a single GET and
//! extracts the price as an exact decimal.

use async_trait::async_trait;
use cart_types::{PriceError, PriceSource};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

/// Success payload of a price lookup.
///
/// Deserialized through serde_json's arbitrary-precision number support so
/// a price like `2.52` lands in `Decimal` without an intermediate `f64`.
/// Any other fields in the document are ignored.
#[derive(Debug, Deserialize)]
struct PriceDocument {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    price: Decimal,
}

/// Pricing-service client.
#[derive(Debug)]
pub struct PricingClient {
    base_url: String,
    http: Client,
}

impl PricingClient {
    /// Creates a new client for the given pricing-service root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Replaces the underlying HTTP client.
    ///
    /// This is the seam through which callers supply their own transport
    /// policy (timeouts, proxies, TLS). The pricing client itself imposes
    /// none.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }
}

#[async_trait]
impl PriceSource for PricingClient {
    async fn fetch_price(&self, product_name: &str) -> Result<Decimal, PriceError> {
        let url = format!("{}/{}.json", self.base_url, product_name);
        debug!(%url, "fetching product price");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PriceError::Transport(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(PriceError::Unavailable {
                product: product_name.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| PriceError::Transport(e.to_string()))?;
        let document: PriceDocument =
            serde_json::from_str(&body).map_err(|e| PriceError::Parse {
                product: product_name.to_string(),
                reason: e.to_string(),
            })?;

        debug!(product = product_name, price = %document.price, "price resolved");
        Ok(document.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PricingClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = PricingClient::new("https://equalexperts.github.io/");
        assert_eq!(client.base_url, "https://equalexperts.github.io");
    }

    #[test]
    fn test_client_with_custom_http_client() {
        let http = Client::builder().build().unwrap();
        let _client = PricingClient::new("http://localhost:3000").with_http_client(http);
    }
}
