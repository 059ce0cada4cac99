//! Error types for the shopping cart.

use rust_decimal::Decimal;

/// Failures while resolving a product's unit price.
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("no price for '{product}': pricing service returned HTTP {status}")]
    Unavailable { product: String, status: u16 },

    #[error("could not reach pricing service: {0}")]
    Transport(String),

    #[error("malformed price response for '{product}': {reason}")]
    Parse { product: String, reason: String },
}

/// Construction-time configuration failures.
///
/// A cart cannot be built from invalid settings; nothing here can occur
/// after construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("product API base URL must not be empty")]
    EmptyBaseUrl,

    #[error("tax rate must not be negative, got {0}")]
    NegativeTaxRate(Decimal),

    #[error("tax rate '{0}' is not a valid decimal")]
    MalformedTaxRate(String),
}

/// Errors surfaced by cart operations.
///
/// Nothing is swallowed or retried: every failure reaches the immediate
/// caller, and the cart's state is untouched by a failed operation.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("quantity must be greater than 0, got {0}")]
    InvalidQuantity(i32),

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_error_converts_to_cart_error() {
        let err: CartError = PriceError::Unavailable {
            product: "cheerios".to_string(),
            status: 404,
        }
        .into();

        assert!(matches!(
            err,
            CartError::Price(PriceError::Unavailable { status: 404, .. })
        ));
    }

    #[test]
    fn test_transparent_price_error_message() {
        let err: CartError = PriceError::Transport("connection refused".to_string()).into();
        assert_eq!(
            err.to_string(),
            "could not reach pricing service: connection refused"
        );
    }
}
