//! Types used throughout the money crate.

/// Number of minor units (cents) in one US dollar.
/// This is used to convert floating-point values to fixed-point representation.
pub const CENTS_PER_DOLLAR: f64 = 100.0;

/// Cents type, representing a fixed-point count of US-dollar minor units.
pub type Cents = i64;
