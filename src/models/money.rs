//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64). Amount text is parsed as a
//! general decimal number and rounded to two fraction digits once, at entry;
//! every later sum is exact integer arithmetic.

use std::fmt;
use std::ops::Add;

/// Largest accepted magnitude in whole currency units
const MAX_UNITS: f64 = 1e15;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(1250); // $12.50
    /// assert_eq!(amount.to_string(), "$12.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse amount text typed into the form
    ///
    /// Accepts anything a general float parser accepts once surrounding
    /// whitespace is trimmed: "12", "12.5", ".5", "1e3", "-4". The value is
    /// rounded to two fraction digits. Non-finite values ("inf", "nan") and
    /// currency-prefixed text ("$12") are rejected.
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// assert_eq!(Money::parse_decimal("12.5").unwrap().cents(), 1250);
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite(trimmed.to_string()));
        }
        if value.abs() >= MAX_UNITS {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }

        // Round through the two-digit rendering so the stored cents always
        // match what the Amount column shows.
        let rendered = format!("{:.2}", value.abs());
        let (units, fraction) = rendered
            .split_once('.')
            .ok_or_else(|| MoneyParseError::InvalidFormat(trimmed.to_string()))?;
        let units: i64 = units
            .parse()
            .map_err(|_| MoneyParseError::OutOfRange(trimmed.to_string()))?;
        let fraction: i64 = fraction
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        let cents = units * 100 + fraction;
        Ok(Self(if value.is_sign_negative() { -cents } else { cents }))
    }

    /// Add two amounts, or `None` if the sum does not fit
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotFinite(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotFinite(s) => write!(f, "Amount is not finite: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
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
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1250)), "$12.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-500)), "-$5.00");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(700).format_with_symbol("€"), "€7.00");
        assert_eq!(Money::from_cents(-1).format_with_symbol("£"), "-£0.01");
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(Money::parse_decimal("12.5").unwrap().cents(), 1250);
        assert_eq!(Money::parse_decimal("7").unwrap().cents(), 700);
        assert_eq!(Money::parse_decimal(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse_decimal("3.50").unwrap().cents(), 350);
        assert_eq!(Money::parse_decimal("  2 ").unwrap().cents(), 200);
    }

    #[test]
    fn test_parse_exponent_and_sign() {
        assert_eq!(Money::parse_decimal("1e3").unwrap().cents(), 100_000);
        assert_eq!(Money::parse_decimal("+4").unwrap().cents(), 400);
        assert_eq!(Money::parse_decimal("-4.25").unwrap().cents(), -425);
    }

    #[test]
    fn test_parse_rounds_to_cents() {
        assert_eq!(Money::parse_decimal("0.999").unwrap().cents(), 100);
        assert_eq!(Money::parse_decimal("19.994").unwrap().cents(), 1999);
        assert_eq!(Money::parse_decimal("-0.001").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse_decimal("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse_decimal("$12").is_err());
        assert!(Money::parse_decimal("12,50").is_err());
        assert!(Money::parse_decimal(" ").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite_and_huge() {
        assert!(matches!(
            Money::parse_decimal("inf"),
            Err(MoneyParseError::NotFinite(_))
        ));
        assert!(matches!(
            Money::parse_decimal("NaN"),
            Err(MoneyParseError::NotFinite(_))
        ));
        assert!(matches!(
            Money::parse_decimal("1e300"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_checked_add() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!(big.checked_add(Money::from_cents(1)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_cents(2)), None);
        assert_eq!(
            Money::from_cents(i64::MIN).checked_add(Money::from_cents(-1)),
            None
        );
    }

    #[test]
    fn test_sum() {
        let total: Money = [1250, 700, -50]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 1900);
    }
}
