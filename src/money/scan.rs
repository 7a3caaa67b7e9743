//! Conversions at an external data-access boundary.
//!
//! A driver hands over untyped values; [`Scannable`] turns one of them into a
//! stored amount in place, and [`Externalizable`] produces the primitive form
//! the driver persists.
use thiserror::Error;

use crate::money::Usd;

/// An untyped value received from an external data-access layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanValue {
    /// A decimal string, e.g. `"18.50"`.
    Text(String),
    /// A decimal string as raw bytes.
    Bytes(Vec<u8>),
    /// A floating-point number.
    Float(f64),
    /// An integer number of whole dollars.
    Int(i64),
    /// An absent value; no conversion rule is defined for it.
    Null,
}

impl ScanValue {
    /// Names the variant for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ScanValue::Text(_) => "text",
            ScanValue::Bytes(_) => "bytes",
            ScanValue::Float(_) => "float",
            ScanValue::Int(_) => "integer",
            ScanValue::Null => "null",
        }
    }
}

impl From<&str> for ScanValue {
    fn from(s: &str) -> Self {
        ScanValue::Text(s.to_owned())
    }
}

impl From<String> for ScanValue {
    fn from(s: String) -> Self {
        ScanValue::Text(s)
    }
}

impl From<&[u8]> for ScanValue {
    fn from(b: &[u8]) -> Self {
        ScanValue::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for ScanValue {
    fn from(b: Vec<u8>) -> Self {
        ScanValue::Bytes(b)
    }
}

impl From<f64> for ScanValue {
    fn from(f: f64) -> Self {
        ScanValue::Float(f)
    }
}

impl From<i64> for ScanValue {
    fn from(i: i64) -> Self {
        ScanValue::Int(i)
    }
}

/// Errors that can occur while scanning an external value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("invalid input: {0:?} cannot be parsed as a USD amount")]
    Parse(String),
    #[error("unsupported input kind: {0}")]
    UnsupportedInputKind(&'static str),
}

/// Populates a value in place from an untyped external value.
pub trait Scannable {
    fn scan(&mut self, value: ScanValue) -> Result<(), ScanError>;
}

/// Produces a primitive representation for an external data-access layer.
/// Never fails.
pub trait Externalizable {
    fn to_value(&self) -> f64;
}

/// Parses a decimal string into a float dollar value.
fn parse_dollars(s: &str) -> Result<f64, ScanError> {
    s.parse().map_err(|_| ScanError::Parse(s.to_owned()))
}

impl Scannable for Usd {
    /// Converts any supported input to the nearest cent. On failure the
    /// receiver is left unmodified.
    fn scan(&mut self, value: ScanValue) -> Result<(), ScanError> {
        let kind = value.kind();
        let dollars = match value {
            ScanValue::Text(s) => parse_dollars(&s)?,
            ScanValue::Bytes(b) => match String::from_utf8(b) {
                Ok(s) => parse_dollars(&s)?,
                Err(err) => {
                    let lossy = String::from_utf8_lossy(err.as_bytes()).into_owned();
                    return Err(ScanError::Parse(lossy));
                }
            },
            ScanValue::Float(f) => f,
            ScanValue::Int(i) => i as f64,
            ScanValue::Null => return Err(ScanError::UnsupportedInputKind(kind)),
        };
        *self = Usd::from_f64(dollars);
        Ok(())
    }
}

impl Externalizable for Usd {
    /// The amount as a two-decimal float; `1850` cents externalizes as `18.50`.
    fn to_value(&self) -> f64 {
        self.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::{Externalizable, ScanError, ScanValue, Scannable};
    use crate::money::Usd;

    #[test]
    fn test_scan() {
        let cases: Vec<(ScanValue, Usd)> = vec![
            (ScanValue::from(0_i64), Usd::from_cents(0)),
            (ScanValue::from(10_i64), Usd::from_cents(1000)),
            (ScanValue::from(1.23), Usd::from_cents(123)),
            (ScanValue::from(1.345), Usd::from_cents(135)),
            (ScanValue::from("10"), Usd::from_cents(1000)),
            (ScanValue::from("1.345"), Usd::from_cents(135)),
            // b"18.00"
            (
                ScanValue::from(vec![49, 56, 46, 48, 48]),
                Usd::from_cents(1800),
            ),
        ];
        for (value, expected) in cases {
            let mut amount = Usd::ZERO;
            amount.scan(value.clone()).unwrap();
            assert_eq!(amount, expected, "scanning {value:?}");
        }
    }

    #[test]
    fn test_scan_invalid_string() {
        let mut amount = Usd::ZERO;
        assert_eq!(
            amount.scan(ScanValue::from("1O")),
            Err(ScanError::Parse("1O".to_owned()))
        );
        assert_eq!(amount, Usd::ZERO);
    }

    #[test]
    fn test_scan_invalid_bytes() {
        // b"12.sd"
        let mut amount = Usd::ZERO;
        assert_eq!(
            amount.scan(ScanValue::from(vec![49, 50, 46, 115, 100])),
            Err(ScanError::Parse("12.sd".to_owned()))
        );
        assert_eq!(amount, Usd::ZERO);
    }

    #[test]
    fn test_scan_failure_leaves_receiver_unmodified() {
        let mut amount = Usd::from_cents(1850);
        assert!(amount.scan(ScanValue::from("not money")).is_err());
        assert_eq!(amount, Usd::from_cents(1850));
    }

    #[test]
    fn test_scan_null_is_unsupported() {
        let mut amount = Usd::from_cents(42);
        assert_eq!(
            amount.scan(ScanValue::Null),
            Err(ScanError::UnsupportedInputKind("null"))
        );
        assert_eq!(amount, Usd::from_cents(42));
    }

    #[test]
    fn test_scan_non_utf8_bytes() {
        let mut amount = Usd::ZERO;
        assert!(matches!(
            amount.scan(ScanValue::from(vec![0xff, 0xfe])),
            Err(ScanError::Parse(_))
        ));
    }

    #[test]
    fn test_to_value() {
        assert_eq!(Usd::from_cents(1850).to_value(), 18.50);
        assert_eq!(Usd::from_cents(0).to_value(), 0.00);
    }

    #[test]
    fn test_error_display_carries_input() {
        let err = ScanError::Parse("1O".to_owned());
        assert_eq!(
            err.to_string(),
            "invalid input: \"1O\" cannot be parsed as a USD amount"
        );
    }
}
