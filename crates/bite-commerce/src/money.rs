//! Money type for representing menu prices.
//!
//! Prices are whole Egyptian pounds. The storefront never divides, so all
//! arithmetic is integer addition and multiplication, checked for overflow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency suffix shown after every amount.
pub const CURRENCY_SUFFIX: &str = "ج";

const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const GROUP_SEPARATOR: char = '٬';

/// A monetary value in the smallest currency unit.
///
/// Serializes as a bare integer, matching the catalog and cart JSON.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money value from a raw amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero pounds.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw amount.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add another amount, `None` on overflow.
    pub fn try_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiply by a quantity, `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Sum amounts, `None` on overflow. An empty iterator sums to zero.
    pub fn try_sum(iter: impl IntoIterator<Item = Money>) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }

    /// Format the way the storefront shows prices (e.g., "١٬٢٥٠ ج").
    pub fn display(&self) -> String {
        format!("{} {}", arabic_grouped(self.0), CURRENCY_SUFFIX)
    }
}

/// Arabic-Indic digits grouped in thousands.
fn arabic_grouped(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len * 3);
    if amount < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        let d = c.to_digit(10).unwrap_or(0) as usize;
        out.push(ARABIC_DIGITS[d]);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}
