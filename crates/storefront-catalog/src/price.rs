//! Display prices.
//!
//! Stored as whole cents so sale-price derivation rounds exactly once.

use std::fmt;

/// A non-negative USD amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    /// Create from cents; negative amounts clamp to zero.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents: cents.max(0) }
    }

    /// Create from a decimal amount, rounding half-up to the cent.
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::ZERO;
        }
        Self::from_cents((amount * 100.0).round() as i64)
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Price after taking `percentage` off, rounded half-up to the cent.
    pub fn apply_discount(&self, percentage: f64) -> Price {
        let pct = percentage.clamp(0.0, 100.0);
        let discounted = self.cents as f64 * (100.0 - pct) / 100.0;
        Self::from_cents(discounted.round() as i64)
    }

    /// How much cheaper `other` is; zero when it is not cheaper.
    pub fn savings_to(&self, other: Price) -> Price {
        Self::from_cents(self.cents - other.cents)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// Format a percentage without trailing zeros: `10.00` → `10%`.
pub fn percent_label(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}%", rounded)
}
