//! # Cart Types
//!
//! Domain types and port traits for the shopping cart.
//! This crate performs no IO of its own - only data structures,
//! monetary arithmetic, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the innermost core of the system:
//! - `domain/` - Monetary rounding and cart settings
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Cart, pricing, and configuration error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CartSettings, round_half_up};
pub use error::{CartError, ConfigError, PriceError};
pub use ports::PriceSource;
