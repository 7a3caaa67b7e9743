//! Represents money in a stable, integer-based way.
//!
//! US-dollar amounts are stored as a signed 64-bit count of cents, so
//! arithmetic and storage never accumulate floating-point drift. Floats only
//! appear at the edges: converting user input in and externalizing a
//! two-decimal value out.
mod money;

pub use money::*;
