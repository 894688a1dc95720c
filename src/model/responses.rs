use crate::presentation::serialization::id_from_string_or_number;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Paginated listing returned by collection endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items of the requested page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Total number of items across all pages
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: None,
        }
    }
}

/// Response of `POST /login`
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent calls
    pub token: String,
    /// Id of the logged in user
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Account email
    #[serde(default)]
    pub email: Option<String>,
}
