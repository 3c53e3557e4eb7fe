//! Monetary amounts.

use core::iter::Sum;
use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Non-negative amount in the smallest currency unit (cents).
///
/// Integer cents keep subtotals and totals exact: `45.99 × 2` is `9198`, never
/// `91.97999…`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build an amount from whole units and cents (`from_major_minor(45, 99)` is `$45.99`).
    ///
    /// `minor` must be below 100.
    pub const fn from_major_minor(major: u64, minor: u8) -> Self {
        debug_assert!(minor < 100, "minor units must be below 100");
        Self(major * 100 + minor as u64)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0 * quantity as u64)
    }

    /// Like [`Money::times`], but `None` on overflow.
    pub const fn checked_times(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Sum of two amounts, `None` on overflow.
    pub const fn checked_add(self, rhs: Money) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        self.times(rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Money::from_major_minor(1200, 0).to_string(), "$1200.00");
        assert_eq!(Money::from_cents(4599).to_string(), "$45.99");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn multiplication_and_sum_are_exact() {
        let subtotals = [
            Money::from_major_minor(1200, 0) * 1,
            Money::from_major_minor(45, 99) * 2,
            Money::from_major_minor(299, 99) * 1,
        ];
        let total: Money = subtotals.iter().sum();
        assert_eq!(total, Money::from_cents(159_197));
        assert_eq!(total.to_string(), "$1591.97");
    }

    #[test]
    fn checked_operations_report_overflow() {
        let big = Money::from_cents(u64::MAX / 2);
        assert_eq!(big.checked_times(2), Some(Money::from_cents(u64::MAX - 1)));
        assert_eq!(big.checked_times(3), None);
        assert_eq!(big.checked_add(Money::from_cents(1)), Some(Money::from_cents(u64::MAX / 2 + 1)));
        assert_eq!(Money::from_cents(u64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "minor units must be below 100")]
    fn minor_units_above_99_are_rejected() {
        let _ = Money::from_major_minor(1, 150);
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: Money = core::iter::empty::<Money>().sum();
        assert_eq!(total, Money::ZERO);
    }
}
