use serde::Deserialize;
use ufood_client::presentation::serialization::{
    id_from_string_or_number, opt_id_from_string_or_number,
};

#[derive(Deserialize)]
struct Holder {
    #[serde(deserialize_with = "id_from_string_or_number")]
    id: String,
    #[serde(default, deserialize_with = "opt_id_from_string_or_number")]
    parent: Option<String>,
}

#[test]
fn test_id_from_string() {
    let h: Holder = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
    assert_eq!(h.id, "abc");
    assert_eq!(h.parent, None);
}

#[test]
fn test_id_from_integer() {
    let h: Holder = serde_json::from_str(r#"{"id":7,"parent":12}"#).unwrap();
    assert_eq!(h.id, "7");
    assert_eq!(h.parent.as_deref(), Some("12"));
}

#[test]
fn test_optional_id_null() {
    let h: Holder = serde_json::from_str(r#"{"id":"a","parent":null}"#).unwrap();
    assert_eq!(h.parent, None);
}

#[test]
fn test_id_rejects_objects() {
    assert!(serde_json::from_str::<Holder>(r#"{"id":{"x":1}}"#).is_err());
}
