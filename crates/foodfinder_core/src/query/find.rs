//! Keyword filter for `find`.
//!
//! A record matches when the keyword is a case-insensitive substring of its
//! name or cuisine, or when its price is at most the keyword read as a price.
//! Non-numeric keywords coerce to `0`, so records priced `<= 0` match any
//! keyword.

use crate::model::restaurant::{coerce_price, Restaurant};

/// Returns whether `restaurant` matches `keyword`.
pub fn matches_keyword(restaurant: &Restaurant, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    restaurant.name.to_lowercase().contains(&needle)
        || restaurant.cuisine.to_lowercase().contains(&needle)
        || restaurant.price <= coerce_price(keyword)
}

/// Keeps the records that match `keyword`, preserving order.
pub fn find_restaurants(restaurants: Vec<Restaurant>, keyword: &str) -> Vec<Restaurant> {
    restaurants
        .into_iter()
        .filter(|restaurant| matches_keyword(restaurant, keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::matches_keyword;
    use crate::model::restaurant::Restaurant;

    #[test]
    fn numeric_keyword_matches_cheaper_records() {
        let cheap = Restaurant::new("Taco Stand", "mexican", 8).unwrap();
        let pricey = Restaurant::new("Steak House", "american", 40).unwrap();
        assert!(matches_keyword(&cheap, "10"));
        assert!(!matches_keyword(&pricey, "10"));
    }

    #[test]
    fn non_numeric_keyword_matches_zero_price() {
        let free = Restaurant::new("Soup Kitchen", "comfort", 0).unwrap();
        assert!(matches_keyword(&free, "sushi"));
    }
}
