//! Decimal prices stored as integer cents.

use std::fmt;

/// A catalog price in euro cents.
///
/// Prices are never represented as floats: `899.99` is stored as `89999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    /// Builds a price from euros and cents, e.g. `from_major_minor(899, 99)`.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Price(major * 100 - minor)
        } else {
            Price(major * 100 + minor)
        }
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole euros (truncated toward zero).
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Cents portion, always in `0..=99`.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02} €",
            sign,
            self.euros().abs(),
            self.cents_part()
        )
    }
}
