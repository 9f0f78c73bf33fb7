//! Fixed-point money.
//!
//! Every amount the machine touches is a whole number of cents. Decimal
//! values only appear at the edges (config files, IPC, display) and are
//! converted with [`Cents::from_decimal`], which rounds half away from zero
//! to the nearest cent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units: `Cents::units(1000)` is 1000.00.
    pub const fn units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Convert a decimal amount to cents, rounding half away from zero.
    /// Returns None for NaN, infinities and amounts outside the i64 range.
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let scaled = (amount * 100.0).round();
        if !(i64::MIN as f64..i64::MAX as f64).contains(&scaled) {
            return None;
        }
        Some(Self(scaled as i64))
    }

    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// None if the sum leaves the i64 range.
    pub fn checked_add(self, rhs: Cents) -> Option<Cents> {
        self.0.checked_add(rhs.0).map(Cents)
    }

    /// Scale by an integer factor (payout multiplier, payline count).
    pub fn times(self, factor: u64) -> Cents {
        let factor = i64::try_from(factor).unwrap_or(i64::MAX);
        Cents(self.0.saturating_mul(factor))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

// Operators saturate at the i64 bounds. Callers that must refuse an
// overflowing amount use `checked_add`.
impl Add for Cents {
    type Output = Cents;
    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Cents {
    type Output = Cents;
    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        *self = *self + rhs;
    }
}

impl SubAssign for Cents {
    fn sub_assign(&mut self, rhs: Cents) {
        *self = *self - rhs;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}
