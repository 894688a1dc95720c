use ufood_client::model::responses::{LoginResponse, Page};
use ufood_client::presentation::{FavoriteList, FavoriteListSummary, Restaurant, User, Visit};

#[test]
fn test_login_response_accepts_numeric_id() {
    let response: LoginResponse =
        serde_json::from_str(r#"{"token":"abc","id":42,"name":"Jane"}"#).unwrap();
    assert_eq!(response.id, "42");
    assert_eq!(response.token, "abc");
    assert_eq!(response.name.as_deref(), Some("Jane"));
    assert_eq!(response.email, None);
}

#[test]
fn test_login_response_requires_token() {
    let result = serde_json::from_str::<LoginResponse>(r#"{"id":"u1"}"#);
    assert!(result.is_err());
}

#[test]
fn test_page_defaults_missing_items() {
    let page: Page<User> = serde_json::from_str(r#"{"total":0}"#).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, Some(0));
}

#[test]
fn test_restaurant_from_api_payload() {
    let json = r#"{
        "id": "5f31b3ff7d2c7a0004a0a1b1",
        "name": "Chez Boulay",
        "address": "1110 Rue Saint-Jean, Québec",
        "tel": "(418) 643-2247",
        "location": {"type": "Point", "coordinates": [-71.2125, 46.8128]},
        "opening_hours": {"monday": null, "tuesday": "11:00-22:00"},
        "pictures": ["https://example.com/a.jpg"],
        "genres": ["Nordique"],
        "price_range": 3,
        "rating": 4.4
    }"#;
    let restaurant: Restaurant = serde_json::from_str(json).unwrap();

    assert_eq!(restaurant.name, "Chez Boulay");
    assert_eq!(restaurant.genres, vec!["Nordique".to_string()]);
    assert_eq!(restaurant.price_range, Some(3));
    let location = restaurant.location.unwrap();
    assert_eq!(location.latitude(), Some(46.8128));
    assert_eq!(location.longitude(), Some(-71.2125));
    assert_eq!(restaurant.opening_hours.get("monday"), Some(&None));
}

#[test]
fn test_restaurant_minimal_payload() {
    let restaurant: Restaurant = serde_json::from_str(r#"{"id":1,"name":"Bistro"}"#).unwrap();
    assert_eq!(restaurant.id, "1");
    assert!(restaurant.location.is_none());
    assert!(restaurant.pictures.is_empty());
}

#[test]
fn test_user_is_following() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","name":"Jane","following":[{"id":"u2","name":"Bob"}],"followers":[]}"#,
    )
    .unwrap();
    assert!(user.is_following("u2"));
    assert!(!user.is_following("u3"));
}

#[test]
fn test_visit_payload() {
    let visit: Visit = serde_json::from_str(
        r#"{"id":"v1","restaurant_id":"r1","user_id":"u1","comment":"Good","rating":4,"date":"2026-10-01"}"#,
    )
    .unwrap();
    assert_eq!(visit.restaurant_id, "r1");
    assert_eq!(visit.user_id.as_deref(), Some("u1"));
    assert_eq!(visit.rating, Some(4));
}

#[test]
fn test_favorite_list_to_summary() {
    let list: FavoriteList = serde_json::from_str(
        r#"{"id":"f1","name":"Brunch","owner":{"id":"u1"},"restaurants":[{"id":"r1"},{"id":"r2"}]}"#,
    )
    .unwrap();
    assert_eq!(list.restaurants.len(), 2);

    let summary = FavoriteListSummary::from(list);
    assert_eq!(summary.id, "f1");
    assert_eq!(summary.name, "Brunch");
}
