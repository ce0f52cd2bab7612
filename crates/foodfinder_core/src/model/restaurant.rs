//! Restaurant domain model.
//!
//! # Responsibility
//! - Define the canonical restaurant record and its wire shape.
//! - Provide the loose price coercion shared by add and find flows.
//!
//! # Invariants
//! - `name` and `cuisine` are non-empty after trimming.
//! - Deserialization runs the same validation as the write path.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static LEADING_INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid leading integer regex"));

/// Validation failures for restaurant records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantValidationError {
    EmptyName,
    EmptyCuisine,
}

impl Display for RestaurantValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "restaurant name cannot be empty"),
            Self::EmptyCuisine => write!(f, "restaurant cuisine cannot be empty"),
        }
    }
}

impl Error for RestaurantValidationError {}

/// One guide entry.
///
/// Serialized as `{"name": .., "cuisine": .., "price": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RestaurantWire")]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    /// Integer price code; compared numerically.
    pub price: i64,
}

#[derive(Deserialize)]
struct RestaurantWire {
    name: String,
    cuisine: String,
    price: i64,
}

impl TryFrom<RestaurantWire> for Restaurant {
    type Error = RestaurantValidationError;

    fn try_from(value: RestaurantWire) -> Result<Self, Self::Error> {
        Self::new(value.name, value.cuisine, value.price)
    }
}

impl Restaurant {
    /// Creates a validated restaurant record.
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: i64,
    ) -> Result<Self, RestaurantValidationError> {
        let restaurant = Self {
            name: name.into(),
            cuisine: cuisine.into(),
            price,
        };
        restaurant.validate()?;
        Ok(restaurant)
    }

    /// Checks record invariants.
    ///
    /// Fields are public, so write paths call this again before persisting.
    pub fn validate(&self) -> Result<(), RestaurantValidationError> {
        if self.name.trim().is_empty() {
            return Err(RestaurantValidationError::EmptyName);
        }
        if self.cuisine.trim().is_empty() {
            return Err(RestaurantValidationError::EmptyCuisine);
        }
        Ok(())
    }

    /// Renders the price as currency, e.g. `15` -> `$15.00`.
    pub fn formatted_price(&self) -> String {
        format!("${}.00", self.price)
    }
}

/// Coerces free text to a price code.
///
/// Parses an optional sign and the leading run of digits; anything that does
/// not start with a number (after whitespace) becomes `0`, as do values that
/// overflow `i64`.
pub fn coerce_price(text: &str) -> i64 {
    LEADING_INTEGER_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}
