//! Money module for fixed-point USD amounts and their boundary conversions.
mod scan;
mod types;
mod usd;

pub use scan::*;
pub use types::*;
pub use usd::*;
