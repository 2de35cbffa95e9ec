//! Money in smallest currency unit (US cents) and its USD rendering.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

const CENTS_PER_DOLLAR: u64 = 100;

/// An amount in cents.
///
/// Arithmetic stays in integer cents; only `Display` converts to dollars.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::invariant("amount overflow"))
    }

    /// Multiply a per-unit amount by a count (seats, attendees).
    pub fn checked_mul(self, count: u64) -> DomainResult<Money> {
        self.0
            .checked_mul(count)
            .map(Money)
            .ok_or_else(|| DomainError::invariant("amount overflow"))
    }
}

/// Renders US dollars: `$1,234.56`.
///
/// Dollars and cents come from exact integer division, so no fractional cent
/// is ever lost or rounded.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let dollars = self.0 / CENTS_PER_DOLLAR;
        let cents = self.0 % CENTS_PER_DOLLAR;
        write!(f, "${}.{:02}", group_thousands(dollars), cents)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
