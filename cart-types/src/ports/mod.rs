//! Port traits implemented by adapters.

pub mod price_source;

pub use price_source::PriceSource;
