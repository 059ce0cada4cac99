//! Domain models for the shopping cart.

pub mod money;
pub mod settings;

pub use money::round_half_up;
pub use settings::CartSettings;
