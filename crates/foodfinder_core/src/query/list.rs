//! Sortable listing.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep load order.
//! - Text keys compare case-insensitively; price compares numerically.

use crate::model::restaurant::Restaurant;
use std::cmp::Ordering;

/// Key used by `list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Name,
    Cuisine,
    Price,
}

impl SortOrder {
    /// Parses one sort keyword; unknown keywords return `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "name" => Some(Self::Name),
            "cuisine" => Some(Self::Cuisine),
            "price" => Some(Self::Price),
            _ => None,
        }
    }

    /// Resolves `list` arguments: `[by] <key>`, defaulting to `Name`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let mut tokens = args.iter().map(AsRef::as_ref);
        let mut token = tokens.next();
        if token == Some("by") {
            token = tokens.next();
        }
        token.and_then(Self::parse).unwrap_or_default()
    }

    fn compare(self, left: &Restaurant, right: &Restaurant) -> Ordering {
        match self {
            Self::Name => left.name.to_lowercase().cmp(&right.name.to_lowercase()),
            Self::Cuisine => left
                .cuisine
                .to_lowercase()
                .cmp(&right.cuisine.to_lowercase()),
            Self::Price => left.price.cmp(&right.price),
        }
    }
}

/// Sorts `restaurants` in place by `order`.
pub fn sort_restaurants(restaurants: &mut [Restaurant], order: SortOrder) {
    restaurants.sort_by(|left, right| order.compare(left, right));
}

#[cfg(test)]
mod tests {
    use super::SortOrder;

    #[test]
    fn from_args_skips_filler_word() {
        assert_eq!(SortOrder::from_args(&["by", "cuisine"]), SortOrder::Cuisine);
        assert_eq!(SortOrder::from_args(&["price"]), SortOrder::Price);
    }

    #[test]
    fn from_args_defaults_to_name() {
        let empty: [&str; 0] = [];
        assert_eq!(SortOrder::from_args(&empty), SortOrder::Name);
        assert_eq!(SortOrder::from_args(&["by"]), SortOrder::Name);
        assert_eq!(SortOrder::from_args(&["rating"]), SortOrder::Name);
    }
}
