use crate::presentation::serialization::id_from_string_or_number;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Short user reference used in follower lists and list owners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    /// User id
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Email
    #[serde(default)]
    pub email: Option<String>,
}

/// User profile
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User id
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email
    #[serde(default)]
    pub email: Option<String>,
    /// Reputation score
    #[serde(default)]
    pub rating: Option<f64>,
    /// Users following this user
    #[serde(default)]
    pub followers: Vec<UserRef>,
    /// Users this user follows
    #[serde(default)]
    pub following: Vec<UserRef>,
}

impl User {
    /// Whether this user follows `user_id`
    #[must_use]
    pub fn is_following(&self, user_id: &str) -> bool {
        self.following.iter().any(|u| u.id == user_id)
    }
}
