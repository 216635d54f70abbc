//! Prices and query outcomes
//!
//! A [`Price`] is a nonnegative amount in the smallest currency unit. Path
//! sums go through [`Price::checked_add`], which never wraps around.
//!
//! A [`Fare`] is the answer to a cheapest-price query: either a concrete
//! [`Price`] or [`Fare::Unreachable`]. Keeping the two apart in the type means
//! "no path" can never be mistaken for "free".

use serde::{Deserialize, Serialize};
use std::fmt;

/// A nonnegative price.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The price of staying where you are.
    pub const ZERO: Price = Price(0);

    /// The largest representable price.
    pub const MAX: Price = Price(u64::MAX);

    /// Creates a price from an amount.
    pub const fn new(amount: u64) -> Self {
        Price(amount)
    }

    /// Returns the raw amount.
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Adds two prices, returning `None` on overflow.
    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    /// Converts a raw signed amount, rejecting negative values.
    pub fn from_signed(amount: i64) -> Option<Price> {
        u64::try_from(amount).ok().map(Price)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Price(amount)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a cheapest-price query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fare {
    /// The cheapest total price of a path to the destination.
    Price(Price),
    /// No path exists from the source to the destination.
    Unreachable,
}

impl Fare {
    /// Returns the price if the destination is reachable.
    pub fn price(self) -> Option<Price> {
        match self {
            Fare::Price(price) => Some(price),
            Fare::Unreachable => None,
        }
    }

    /// Returns true if a path exists.
    pub fn is_reachable(self) -> bool {
        matches!(self, Fare::Price(_))
    }

    /// Combines two legs into one. Unreachable absorbs, overflow yields `None`.
    pub fn then(self, other: Fare) -> Option<Fare> {
        match (self, other) {
            (Fare::Price(a), Fare::Price(b)) => a.checked_add(b).map(Fare::Price),
            _ => Some(Fare::Unreachable),
        }
    }
}

impl From<Option<Price>> for Fare {
    fn from(price: Option<Price>) -> Self {
        price.map_or(Fare::Unreachable, Fare::Price)
    }
}

impl From<Price> for Fare {
    fn from(price: Price) -> Self {
        Fare::Price(price)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fare::Price(price) => write!(f, "{}", price),
            Fare::Unreachable => write!(f, "unreachable"),
        }
    }
}
