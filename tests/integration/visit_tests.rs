use crate::common::{TEST_USER_ID, bearer, create_test_client, logged_in_client};
use mockito::{Matcher, Server};
use serde_json::json;
use ufood_client::prelude::*;

fn new_visit() -> NewVisit {
    NewVisit {
        restaurant_id: "r1".to_string(),
        comment: "Great crust".to_string(),
        rating: 4,
        date: "2026-10-01T19:30:00.000Z".to_string(),
    }
}

#[tokio::test]
async fn test_get_user_visits_defaults_to_logged_in_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("/users/{TEST_USER_ID}/restaurants/visits").as_str())
        .match_header("authorization", bearer().as_str())
        .match_query(Matcher::Exact("limit=10&page=0".into()))
        .with_status(200)
        .with_body(
            r#"{"items":[
                {"id":"v1","restaurant_id":"r1","user_id":"u1","comment":"Nice","rating":5,"date":"2026-09-01"},
                {"id":2,"restaurant_id":3,"comment":"Meh","rating":2}
            ],"total":2}"#,
        )
        .create_async()
        .await;

    let client = logged_in_client(&server);
    let visits = client.get_user_visits(None, 10, 0).await.unwrap();

    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0].user_id.as_deref(), Some("u1"));
    assert_eq!(visits[1].id, "2");
    assert_eq!(visits[1].restaurant_id, "3");
    assert_eq!(visits[1].user_id, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_user_visits_for_other_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/u9/restaurants/visits")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"items":[]}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server);
    let visits = client.get_user_visits(Some("u9"), 10, 0).await.unwrap();

    assert!(visits.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_user_visits_requires_login() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let err = client.get_user_visits(Some("u9"), 10, 0).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_user_visits_without_user_id_is_missing_argument() {
    let server = Server::new_async().await;
    let client = create_test_client(&server);
    client.session().set_credential("token-without-user");

    let err = client.get_user_visits(None, 10, 0).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingArgument);
    assert_eq!(err.to_string(), "No user id available.");
}

#[tokio::test]
async fn test_get_visits_by_restaurant_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/u1/restaurants/r1/visits")
        .with_status(200)
        .with_body(r#"{"items":[{"id":"v1","restaurant_id":"r1","comment":"Again!"}],"total":1}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server);
    let page = client.get_visits_by_restaurant_id("r1", None).await.unwrap();

    assert_eq!(page.total, Some(1));
    assert_eq!(page.items[0].comment, "Again!");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_visit_posts_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/users/u1/restaurants/visits")
        .match_header("authorization", bearer().as_str())
        .match_body(Matcher::Json(json!({
            "restaurant_id": "r1",
            "comment": "Great crust",
            "rating": 4,
            "date": "2026-10-01T19:30:00.000Z"
        })))
        .with_status(201)
        .with_body(
            r#"{"id":"v10","restaurant_id":"r1","user_id":"u1","comment":"Great crust","rating":4,"date":"2026-10-01T19:30:00.000Z"}"#,
        )
        .create_async()
        .await;

    let client = logged_in_client(&server);
    let visit = client.create_visit(None, &new_visit()).await.unwrap();

    assert_eq!(visit.id, "v10");
    assert_eq!(visit.rating, Some(4));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_visit_rejected_by_server() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/users/u1/restaurants/visits")
        .with_status(400)
        .with_body("rating must be between 1 and 5")
        .create_async()
        .await;

    let client = logged_in_client(&server);
    let err = client.create_visit(None, &new_visit()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::HttpError);
    assert_eq!(
        err.to_string(),
        "400 Bad Request - rating must be between 1 and 5"
    );
}
