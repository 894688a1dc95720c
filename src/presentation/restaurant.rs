use crate::presentation::serialization::id_from_string_or_number;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// GeoJSON point of a restaurant
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// GeoJSON type, always `Point`
    #[serde(rename = "type", default)]
    pub kind: String,
    /// `[longitude, latitude]`
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl Location {
    /// Latitude, if the coordinates are complete
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.get(1).copied()
    }

    /// Longitude, if the coordinates are complete
    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.first().copied()
    }
}

/// Restaurant as returned by `/restaurants` and `/restaurants/{id}`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique identifier
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Name
    pub name: String,
    /// Street address
    #[serde(default)]
    pub address: Option<String>,
    /// Phone number
    #[serde(default)]
    pub tel: Option<String>,
    /// Position
    #[serde(default)]
    pub location: Option<Location>,
    /// Opening hours keyed by day of week
    #[serde(default)]
    pub opening_hours: BTreeMap<String, Option<String>>,
    /// Picture URLs
    #[serde(default)]
    pub pictures: Vec<String>,
    /// Genres (e.g. "Pizza", "Sushi")
    #[serde(default)]
    pub genres: Vec<String>,
    /// Price range from 1 to 5
    #[serde(default)]
    pub price_range: Option<u8>,
    /// Average rating
    #[serde(default)]
    pub rating: Option<f64>,
}
