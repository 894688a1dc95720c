use crate::common::{TEST_TOKEN, bearer, create_test_client, logged_in_client};
use mockito::{Matcher, Server};
use serde_json::json;
use ufood_client::prelude::*;

#[tokio::test]
async fn test_login_stores_token_and_user_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "email": "jane@example.com",
            "password": "secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"fresh-token","id":"u42","name":"Jane"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let response = client.login("jane@example.com", "secret").await.unwrap();

    assert_eq!(response.token, "fresh-token");
    assert_eq!(response.id, "u42");
    assert!(client.is_authenticated());
    assert_eq!(client.session().credential().unwrap().token(), "fresh-token");
    assert_eq!(client.session().user_id().as_deref(), Some("u42"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_failure_keeps_client_anonymous() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/login")
        .with_status(401)
        .with_body("Invalid credentials")
        .create_async()
        .await;

    let client = create_test_client(&server);
    let err = client.login("jane@example.com", "wrong").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::HttpError);
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_login_replaces_previous_session() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/login")
        .with_status(200)
        .with_body(r#"{"token":"other-token","id":"u2"}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server);
    client.select_favorite_list("f-old");
    client.login("bob@example.com", "pw").await.unwrap();

    assert_eq!(client.session().user_id().as_deref(), Some("u2"));
    assert_eq!(client.selected_favorite_list_id(), None);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/logout")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .create_async()
        .await;

    let client = logged_in_client(&server);
    client.select_favorite_list("f1");
    client.session().set_cached_user(&json!({"id": "u1"}));

    client.logout().await.unwrap();

    assert!(!client.is_authenticated());
    assert_eq!(client.session().user_id(), None);
    assert_eq!(client.session().cached_user(), None);
    assert_eq!(client.selected_favorite_list_id(), None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_session_when_server_fails() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/logout")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = logged_in_client(&server);
    let result = client.logout().await;

    assert!(result.is_ok());
    assert!(!client.is_authenticated());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_session_when_server_unreachable() {
    let client = Client::new(Config::with_base_url("http://127.0.0.1:1")).unwrap();
    client.session().set_credential(TEST_TOKEN);

    client.logout().await.unwrap();

    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_logout_when_anonymous_skips_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/logout")
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server);
    client.logout().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_register_sends_form() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/signup")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), "Jane".into()),
            Matcher::UrlEncoded("email".into(), "jane@example.com".into()),
            Matcher::UrlEncoded("password".into(), "secret".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id":"u42","name":"Jane","email":"jane@example.com","followers":[],"following":[]}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let user = client
        .register("Jane", "jane@example.com", "secret")
        .await
        .unwrap();

    assert_eq!(user.id, "u42");
    assert!(!client.is_authenticated());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_user_info_caches_user() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/tokenInfo")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body(r#"{"id":"u1","name":"Jane","email":"jane@example.com"}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server);
    let user = client.get_user_info().await.unwrap();

    assert_eq!(user.name, "Jane");
    let cached = client.session().cached_user().unwrap();
    assert_eq!(cached["email"], "jane@example.com");
}

#[tokio::test]
async fn test_get_user_info_requires_login() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tokenInfo")
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let err = client.get_user_info().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_default_favorite_list_selects_it() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/favorites")
        .match_body(Matcher::Json(json!({"name": "My Favorites"})))
        .with_status(200)
        .with_body(r#"{"id":"f-default","name":"My Favorites","restaurants":[]}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server);
    let list = client.create_default_favorite_list().await.unwrap();

    assert_eq!(list.id, "f-default");
    assert_eq!(client.selected_favorite_list_id().as_deref(), Some("f-default"));
    mock.assert_async().await;
}
