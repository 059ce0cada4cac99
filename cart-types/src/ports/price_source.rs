//! Price lookup port.
//!
//! This trait defines the interface for unit-price resolution.
//! Implementations can be HTTP clients, in-memory stubs, etc.

use rust_decimal::Decimal;

use crate::error::PriceError;

/// Port trait for unit-price providers.
///
/// Each call is independent: implementations perform no retries and no
/// caching. The call may suspend the calling task until the price arrives
/// or the lookup fails; any timeout is the implementation's (or its
/// transport's) concern, never imposed here.
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    /// Resolves the current unit price for a product.
    async fn fetch_price(&self, product_name: &str) -> Result<Decimal, PriceError>;
}
