use crate::presentation::serialization::id_from_string_or_number;
use crate::presentation::user::UserRef;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Restaurant entry of a favorite list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRestaurant {
    /// Restaurant id
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Restaurant name, when the API expands it
    #[serde(default)]
    pub name: Option<String>,
}

/// Favorite list with its restaurants
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteList {
    /// List id
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// List name
    pub name: String,
    /// Owner of the list
    #[serde(default)]
    pub owner: Option<UserRef>,
    /// Restaurants in the list
    #[serde(default)]
    pub restaurants: Vec<FavoriteRestaurant>,
}

/// `{id, name}` pair shown in list pickers
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct FavoriteListSummary {
    /// List id
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// List name
    pub name: String,
}

impl From<FavoriteList> for FavoriteListSummary {
    fn from(list: FavoriteList) -> Self {
        Self {
            id: list.id,
            name: list.name,
        }
    }
}
