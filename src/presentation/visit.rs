use crate::presentation::serialization::{id_from_string_or_number, opt_id_from_string_or_number};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A user's visit to a restaurant, with its review
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Visit id
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Visited restaurant
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub restaurant_id: String,
    /// Author of the visit
    #[serde(default, deserialize_with = "opt_id_from_string_or_number")]
    pub user_id: Option<String>,
    /// Review text
    #[serde(default)]
    pub comment: String,
    /// Rating from 1 to 5
    #[serde(default)]
    pub rating: Option<u8>,
    /// Visit date (ISO 8601)
    #[serde(default)]
    pub date: Option<String>,
}
