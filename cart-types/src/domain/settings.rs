//! Cart configuration value.
//!
//! Settings are an explicit, immutable value handed to the cart at
//! construction. There is no global config loader: whoever owns the process
//! (application wiring, tests) builds a `CartSettings` and injects it, which
//! keeps construction failures local and testable.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Historical default pricing-service root.
pub const DEFAULT_PRODUCT_API_URL: &str = "https://equalexperts.github.io/";

/// Default fractional tax rate (12.5%).
pub fn default_tax_rate() -> Decimal {
    Decimal::new(125, 3)
}

/// Immutable settings for one shopping session.
///
/// Both fields are fixed for the lifetime of the cart that holds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSettings {
    base_url: String,
    tax_rate: Decimal,
}

impl CartSettings {
    /// Creates settings from an already-parsed tax rate.
    ///
    /// The base URL is taken as supplied; no assumption is made about its
    /// shape beyond "resolves to `{base}/{product}.json`".
    pub fn new(base_url: impl Into<String>, tax_rate: Decimal) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if tax_rate.is_sign_negative() {
            return Err(ConfigError::NegativeTaxRate(tax_rate));
        }
        Ok(Self { base_url, tax_rate })
    }

    /// Creates settings from a textual tax rate, e.g. a value read from a
    /// properties or environment source by the surrounding application.
    pub fn parse(base_url: impl Into<String>, tax_rate: &str) -> Result<Self, ConfigError> {
        let rate = Decimal::from_str(tax_rate.trim())
            .map_err(|_| ConfigError::MalformedTaxRate(tax_rate.to_string()))?;
        Self::new(base_url, rate)
    }

    /// Pricing-service root URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fractional tax rate applied to the subtotal.
    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PRODUCT_API_URL.to_string(),
            tax_rate: default_tax_rate(),
        }
    }
}
