//! Signup pricing per role.

use serde::{Deserialize, Serialize};

/// Minor currency units per major unit (paise per rupee)
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Price of signing up for a role
///
/// Stored as minor units; a stored zero reads back as `Free`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum SignupPrice {
    #[default]
    Free,
    /// Strictly positive amount in minor units
    Paid(i64),
}

impl SignupPrice {
    /// Interpret a stored minor-unit amount
    pub fn from_minor(amount: i64) -> Result<Self, String> {
        match amount {
            0 => Ok(SignupPrice::Free),
            a if a > 0 => Ok(SignupPrice::Paid(a)),
            a => Err(format!("Negative signup amount: {}", a)),
        }
    }

    /// Build from an admin-supplied major-unit amount and free flag
    ///
    /// A free flag ignores the amount entirely. A paid price needs a finite,
    /// strictly positive amount that survives rounding to minor units.
    pub fn from_major(amount: f64, is_free: bool) -> Result<Self, String> {
        if is_free {
            return Ok(SignupPrice::Free);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(format!("Amount must be a positive number, got {}", amount));
        }
        let minor = (amount * MINOR_UNITS_PER_MAJOR as f64).round();
        if minor < 1.0 || minor > i64::MAX as f64 {
            return Err(format!("Amount out of range: {}", amount));
        }
        Ok(SignupPrice::Paid(minor as i64))
    }

    pub fn is_free(&self) -> bool {
        matches!(self, SignupPrice::Free)
    }

    /// Amount in minor units; zero when free
    pub fn amount_minor(&self) -> i64 {
        match self {
            SignupPrice::Free => 0,
            SignupPrice::Paid(amount) => *amount,
        }
    }

    /// Amount in major units; zero when free
    pub fn amount_major(&self) -> f64 {
        self.amount_minor() as f64 / MINOR_UNITS_PER_MAJOR as f64
    }
}
