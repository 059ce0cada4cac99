//! # Cart Core
//!
//! The shopping cart aggregate: concurrent-safe accumulation of per-product
//! quantities and monetary totals, with subtotal/tax/total derivation.
//!
//! The cart is generic over `P: PriceSource`, so the HTTP pricing adapter
//! and in-memory test stubs are interchangeable at compile time.

pub mod cart;


pub use cart::Cart;
