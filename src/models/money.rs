//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so balances and spend
//! percentages are exact. Provides arithmetic, parsing and the plain
//! two-decimal formatting used by ledger rendering.
//!
//! Parsed amounts are limited to [`MAX_ABS_CENTS`]. Arithmetic saturates at
//! the `i64` bounds instead of overflowing, so a ledger built from
//! `from_cents` values can never panic while summing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Largest magnitude, in cents, accepted by [`Money::parse`] and
/// [`Money::from_dollars_f64`] (ten trillion dollars)
pub const MAX_ABS_CENTS: i64 = 1_000_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_plain_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a floating-point dollar value, rounded to the nearest cent
    pub fn from_dollars_f64(dollars: f64) -> Result<Self, MoneyParseError> {
        if !dollars.is_finite() {
            return Err(MoneyParseError::InvalidFormat(dollars.to_string()));
        }
        let cents = (dollars * 100.0).round();
        if cents.abs() > MAX_ABS_CENTS as f64 {
            return Err(MoneyParseError::OutOfRange(dollars.to_string()));
        }
        Ok(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "-$10.50", "10", ".99".
    /// Only a single leading `-` is accepted as a sign. Fractional digits
    /// past the second are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());
        // Digits are validated first, so a failed integer parse means overflow.
        let out_of_range = || MoneyParseError::OutOfRange(original.to_string());

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

        if s.is_empty() {
            return Err(invalid());
        }

        let cents = match s.split_once('.') {
            Some((whole, frac)) => {
                if !is_digits(whole) || !is_digits(frac) {
                    return Err(invalid());
                }
                if whole.is_empty() && frac.is_empty() {
                    return Err(invalid());
                }

                let dollars: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| out_of_range())?
                };

                let cents: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => frac[..2].parse().map_err(|_| invalid())?,
                };

                dollars
                    .checked_mul(100)
                    .and_then(|d| d.checked_add(cents))
                    .ok_or_else(out_of_range)?
            }
            None if is_digits(s) => s
                .parse::<i64>()
                .ok()
                .and_then(|d| d.checked_mul(100))
                .ok_or_else(out_of_range)?,
            None => return Err(invalid()),
        };

        if cents > MAX_ABS_CENTS {
            return Err(out_of_range());
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format as a bare two-decimal number, e.g. `-199.99`
    pub fn to_plain_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

/// Accepted JSON shapes: `12.5` (dollars) or `"12.50"`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMoney {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match RawMoney::deserialize(deserializer)? {
            RawMoney::Number(n) => Money::from_dollars_f64(n),
            RawMoney::Text(s) => Money::parse(&s),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Money amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_dollars_f64() {
        assert_eq!(Money::from_dollars_f64(1000.99).unwrap().cents(), 100099);
        assert_eq!(Money::from_dollars_f64(0.99).unwrap().cents(), 99);
        assert_eq!(Money::from_dollars_f64(-10.15).unwrap().cents(), -1015);
        assert!(Money::from_dollars_f64(f64::NAN).is_err());
    }

    #[test]
    fn test_from_dollars_f64_rejects_huge_values() {
        assert!(matches!(
            Money::from_dollars_f64(1e20),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::from_dollars_f64(-1e20),
            Err(MoneyParseError::OutOfRange(_))
        ));
        let max_dollars = (MAX_ABS_CENTS / 100) as f64;
        assert_eq!(
            Money::from_dollars_f64(max_dollars).unwrap().cents(),
            MAX_ABS_CENTS
        );
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN);

        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(min - Money::from_cents(1), min);
        assert_eq!((-min).cents(), i64::MAX);
        assert_eq!(min.abs().cents(), i64::MAX);
        let total: Money = [max, max].iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_cents(80100).to_plain_string(), "801.00");
        assert_eq!(Money::from_cents(-19999).to_plain_string(), "-199.99");
        assert_eq!(Money::from_cents(-5).to_plain_string(), "-0.05");
        assert_eq!(Money::zero().to_plain_string(), "0.00");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert!((b - a).is_negative());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".99").unwrap().cents(), 99);
        assert_eq!(Money::parse("1.999").unwrap().cents(), 199);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.x5").is_err());
        assert!(Money::parse("$-10.50").is_err());
        assert!(Money::parse("--1").is_err());
        assert!(Money::parse("--1.50").is_err());
        assert!(Money::parse("+-1").is_err());
        assert!(Money::parse("+1").is_err());
    }

    #[test]
    fn test_parse_sign_before_symbol() {
        assert_eq!(Money::parse("-$10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("-.5").unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            Money::parse("100000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("-10000000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(Money::parse("10000000000000").is_ok());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(-300),
        ];
        let total: Money = amounts.iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"10.50\"");

        let from_number: Money = serde_json::from_str("10.5").unwrap();
        let from_integer: Money = serde_json::from_str("10").unwrap();
        let from_text: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(from_number, m);
        assert_eq!(from_integer.cents(), 1000);
        assert_eq!(from_text, m);

        assert!(serde_json::from_str::<Money>("\"ten\"").is_err());
        assert!(serde_json::from_str::<Money>("1e20").is_err());
    }
}
