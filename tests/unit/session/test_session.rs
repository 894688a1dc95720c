use chrono::Duration;
use serde_json::json;
use std::sync::Arc;
use ufood_client::constants::{SELECTED_FAVORITE_LIST_KEY, TOKEN_KEY, USER_ID_KEY, USER_KEY};
use ufood_client::session::auth::Session;
use ufood_client::session::interface::{Credential, SessionStore};
use ufood_client::session::store::MemorySessionStore;

fn session_with_store() -> (Session, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let session = Session::new(store.clone(), Duration::hours(24));
    (session, store)
}

#[test]
fn test_new_session_is_anonymous() {
    let (session, _) = session_with_store();
    assert!(!session.is_authenticated());
    assert!(session.credential().is_none());
}

#[test]
fn test_set_credential_authenticates() {
    let (session, store) = session_with_store();
    session.set_credential("abc");

    assert!(session.is_authenticated());
    assert_eq!(session.credential(), Some(Credential::new("abc")));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
}

#[test]
fn test_set_credential_replaces_previous_token() {
    let (session, _) = session_with_store();
    session.set_credential("first");
    session.set_credential("second");
    assert_eq!(session.credential().unwrap().token(), "second");
}

#[test]
fn test_clear_credential_removes_derived_values() {
    let (session, store) = session_with_store();
    session.set_credential("abc");
    session.set_user_id("u1");
    session.set_cached_user(&json!({"id": "u1", "name": "Jane"}));
    session.set_selected_favorite_list_id("f1");
    store.set("theme", "dark", None);

    session.clear_credential();

    assert!(!session.is_authenticated());
    assert_eq!(session.user_id(), None);
    assert_eq!(session.cached_user(), None);
    assert_eq!(session.selected_favorite_list_id(), None);
    for key in [TOKEN_KEY, USER_ID_KEY, USER_KEY, SELECTED_FAVORITE_LIST_KEY] {
        assert_eq!(store.get(key), None, "{key} should be cleared");
    }
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn test_expired_token_is_anonymous() {
    let store = Arc::new(MemorySessionStore::new());
    let session = Session::new(store, Duration::seconds(-1));
    session.set_credential("abc");
    assert!(!session.is_authenticated());
}

#[test]
fn test_empty_token_is_anonymous() {
    let (session, store) = session_with_store();
    store.set(TOKEN_KEY, "", None);
    assert!(!session.is_authenticated());
}

#[test]
fn test_cached_user_round_trip() {
    let (session, _) = session_with_store();
    let user = json!({"id": "u1", "name": "Jane"});
    session.set_cached_user(&user);
    assert_eq!(session.cached_user(), Some(user));
}

#[test]
fn test_unreadable_cached_user_is_ignored() {
    let (session, store) = session_with_store();
    store.set(USER_KEY, "{not json", None);
    assert_eq!(session.cached_user(), None);
}

#[test]
fn test_clear_selected_favorite_list_keeps_credential() {
    let (session, _) = session_with_store();
    session.set_credential("abc");
    session.set_selected_favorite_list_id("f1");
    session.clear_selected_favorite_list();
    assert_eq!(session.selected_favorite_list_id(), None);
    assert!(session.is_authenticated());
}

#[test]
fn test_credential_debug_hides_token() {
    let credential = Credential::new("super-secret");
    assert_eq!(format!("{credential:?}"), "Credential(***)");
    assert_eq!(credential.bearer(), "Bearer super-secret");
}
