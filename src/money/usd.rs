//! Fixed-point US-dollar amounts and their arithmetic.
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::money::types::{CENTS_PER_DOLLAR, Cents};

/// A US-dollar amount stored as a signed count of cents.
///
/// The decimal value is always `cents / 100`; `$18.00` is held as `1800` and
/// nothing is ever stored as floating point. Each operation produces a new
/// value rather than mutating the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Usd(Cents);

impl Usd {
    /// A zero-dollar amount.
    pub const ZERO: Usd = Usd(0);

    /// Creates an amount from a raw cent count.
    pub const fn from_cents(cents: Cents) -> Self {
        Usd(cents)
    }

    /// Converts a float dollar value to `Usd`, rounding to the nearest cent.
    ///
    /// Rounding adds half a cent and truncates toward zero: positive halves
    /// round up, while negative amounts are biased toward zero.
    pub fn from_f64(dollars: f64) -> Self {
        Usd((dollars * CENTS_PER_DOLLAR + 0.5) as Cents)
    }

    /// Gets the raw cent count.
    pub const fn cents(self) -> Cents {
        self.0
    }

    /// Converts the amount to a float dollar value.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / CENTS_PER_DOLLAR
    }

    /// Multiplies the amount by a rate, rounding to the nearest cent.
    /// Used for percentage-based computations such as tax or discounts.
    pub fn multiply(self, rate: f64) -> Self {
        Usd((self.0 as f64 * rate + 0.5) as Cents)
    }
}

impl fmt::Display for Usd {
    /// Formats as a `$`-prefixed two-decimal string, e.g. `$12.34`.
    /// Negative amounts render as `-$0.01`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", cents / 100, cents % 100)
    }
}

/// Serializes as the two-decimal float form, the same representation handed
/// to a database boundary; `1800` cents serializes as `18.0`.
impl Serialize for Usd {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_f64().serialize(serializer)
    }
}

/// Deserializes from a float dollar value, rounding to the nearest cent.
impl<'de> Deserialize<'de> for Usd {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dollars = f64::deserialize(deserializer)?;
        Ok(Usd::from_f64(dollars))
    }
}

impl Add for Usd {
    type Output = Usd;

    fn add(self, rhs: Usd) -> Usd {
        Usd(self.0 + rhs.0)
    }
}

impl Sub for Usd {
    type Output = Usd;

    fn sub(self, rhs: Usd) -> Usd {
        Usd(self.0 - rhs.0)
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Usd) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Usd {
    fn sub_assign(&mut self, rhs: Usd) {
        self.0 -= rhs.0;
    }
}

impl Neg for Usd {
    type Output = Usd;

    fn neg(self) -> Usd {
        Usd(-self.0)
    }
}
