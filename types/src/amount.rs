//! Rebate amount type.
//!
//! Amounts are fixed-point integers (u64) denominated in paise to avoid
//! floating-point errors. 100 paise = 1 rupee.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A cashback/rebate amount in paise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RebateAmount(u64);

impl RebateAmount {
    pub const ZERO: Self = Self(0);

    /// Paise per rupee.
    pub const PAISE_PER_RUPEE: u64 = 100;

    pub fn new(paise: u64) -> Self {
        Self(paise)
    }

    /// Construct from a whole-rupee value.
    pub fn from_rupees(rupees: u64) -> Self {
        Self(rupees * Self::PAISE_PER_RUPEE)
    }

    pub fn paise(&self) -> u64 {
        self.0
    }

    /// Whole-rupee part of the amount (fraction truncated).
    pub fn rupees(&self) -> u64 {
        self.0 / Self::PAISE_PER_RUPEE
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for RebateAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for RebateAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rupees = self.0 / Self::PAISE_PER_RUPEE;
        let paise = self.0 % Self::PAISE_PER_RUPEE;
        if paise == 0 {
            write!(f, "₹{rupees}")
        } else {
            write!(f, "₹{rupees}.{paise:02}")
        }
    }
}
