//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are US dollar amounts in the standard unit (dollars, not cents) and
//! always render with two decimals followed by the currency code, e.g.
//! `"10.00 USD"`. Midpoints round away from zero, so `12.345` shows as
//! `12.35`.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currency code appended to every displayed amount.
pub const CURRENCY_CODE: &str = "USD";

/// A non-negative USD price.
///
/// A zero amount marks a free item. Arithmetic saturates at [`Decimal::MAX`]
/// instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    /// Amount in dollars.
    pub amount: Decimal,
}

impl Price {
    /// A free (zero) price.
    pub const ZERO: Self = Self::new(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Create a price from a whole-dollar amount.
    #[must_use]
    pub fn usd(dollars: u32) -> Self {
        Self::new(Decimal::from(dollars))
    }

    /// Whether this price marks a free item.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.amount.is_zero()
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(
            self.amount
                .checked_mul(Decimal::from(quantity))
                .unwrap_or(Decimal::MAX),
        )
    }

    /// Sum of two prices.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self::new(
            self.amount
                .checked_add(other.amount)
                .unwrap_or(Decimal::MAX),
        )
    }

    /// Format for display with two decimals (e.g., `"10.00 USD"`).
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{rounded:.2} {CURRENCY_CODE}")
    }
}
