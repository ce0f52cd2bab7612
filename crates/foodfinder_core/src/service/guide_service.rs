//! Restaurant guide use-case service.
//!
//! # Responsibility
//! - Provide list/find/add entry points for the command loop.
//! - Delegate persistence to a `RestaurantStore` implementation.
//!
//! # Invariants
//! - Every query works on a fresh load, so results reflect prior adds.
//! - Returned lists are owned copies; callers may reorder them freely.

use crate::model::restaurant::{coerce_price, Restaurant};
use crate::query::find::find_restaurants;
use crate::query::list::{sort_restaurants, SortOrder};
use crate::store::{RestaurantStore, StoreResult};
use log::{info, warn};

/// Raw field input collected by the add flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRestaurantRequest {
    pub name: String,
    pub cuisine: String,
    /// Free text, coerced with `coerce_price`.
    pub price: String,
}

/// Use-case service wrapper over a record store.
pub struct GuideService<S: RestaurantStore> {
    store: S,
}

impl<S: RestaurantStore> GuideService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads every saved restaurant.
    pub fn saved_restaurants(&self) -> StoreResult<Vec<Restaurant>> {
        let report = self.store.load_all()?;
        if report.skipped > 0 {
            warn!(
                "event=load_restaurants module=service status=partial records={} skipped={}",
                report.restaurants.len(),
                report.skipped
            );
        }
        Ok(report.restaurants)
    }

    /// Lists all restaurants sorted by `order`.
    pub fn list(&self, order: SortOrder) -> StoreResult<Vec<Restaurant>> {
        let mut restaurants = self.saved_restaurants()?;
        sort_restaurants(&mut restaurants, order);
        Ok(restaurants)
    }

    /// Lists restaurants matching `keyword`, in load order.
    pub fn find(&self, keyword: &str) -> StoreResult<Vec<Restaurant>> {
        Ok(find_restaurants(self.saved_restaurants()?, keyword))
    }

    /// Builds and appends a restaurant from raw field input.
    ///
    /// # Contract
    /// - Name and cuisine are trimmed; price is coerced, never rejected.
    /// - Blank name or cuisine fails with `StoreError::Validation`.
    pub fn add(&self, request: &AddRestaurantRequest) -> StoreResult<Restaurant> {
        let restaurant = Restaurant::new(
            request.name.trim(),
            request.cuisine.trim(),
            coerce_price(&request.price),
        )?;
        self.store.append(&restaurant)?;
        info!("event=add_restaurant module=service status=ok");
        Ok(restaurant)
    }
}
