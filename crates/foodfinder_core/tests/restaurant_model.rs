use foodfinder_core::{Restaurant, RestaurantValidationError};

#[test]
fn serialization_uses_expected_wire_fields() {
    let restaurant = Restaurant::new("Pizza Place", "italian", 15).unwrap();

    let json = serde_json::to_value(&restaurant).unwrap();
    assert_eq!(json["name"], "Pizza Place");
    assert_eq!(json["cuisine"], "italian");
    assert_eq!(json["price"], 15);

    let decoded: Restaurant = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, restaurant);
}

#[test]
fn deserialize_rejects_blank_name() {
    let value = serde_json::json!({
        "name": "   ",
        "cuisine": "thai",
        "price": 10
    });

    let err = serde_json::from_value::<Restaurant>(value).unwrap_err();
    assert!(
        err.to_string().contains("name cannot be empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn validate_catches_fields_mutated_after_construction() {
    let mut restaurant = Restaurant::new("Baan", "thai", 10).unwrap();
    restaurant.cuisine.clear();
    assert_eq!(
        restaurant.validate().unwrap_err(),
        RestaurantValidationError::EmptyCuisine
    );
}
