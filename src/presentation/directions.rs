use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WaypointLocation {
    lat_lng: LatLng,
}

/// Origin or destination of a route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    location: WaypointLocation,
}

impl Waypoint {
    /// Waypoint at the given coordinates
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            location: WaypointLocation {
                lat_lng: LatLng {
                    latitude,
                    longitude,
                },
            },
        }
    }

    /// Coordinates of the waypoint
    #[must_use]
    pub fn lat_lng(&self) -> LatLng {
        self.location.lat_lng
    }
}

/// Travel mode understood by the routes API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    /// Car
    #[default]
    Drive,
    /// Bicycle
    Bicycle,
    /// On foot
    Walk,
    /// Two-wheeled motorized vehicle
    TwoWheeler,
    /// Public transit
    Transit,
}

/// Body of a compute-routes request
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Start of the route
    pub origin: Waypoint,
    /// End of the route
    pub destination: Waypoint,
    /// How the user travels
    pub travel_mode: TravelMode,
}

impl RouteRequest {
    /// Route between two coordinates
    pub fn between(origin: (f64, f64), destination: (f64, f64), travel_mode: TravelMode) -> Self {
        Self {
            origin: Waypoint::at(origin.0, origin.1),
            destination: Waypoint::at(destination.0, destination.1),
            travel_mode,
        }
    }
}

/// Encoded polyline of a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyline {
    /// Polyline in Google's encoded format
    pub encoded_polyline: String,
}

/// One computed route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Travel time, e.g. `"734s"`
    #[serde(default)]
    pub duration: Option<String>,
    /// Length of the route in meters
    #[serde(default)]
    pub distance_meters: Option<u64>,
    /// Shape of the route
    #[serde(default)]
    pub polyline: Option<Polyline>,
}

impl Route {
    /// Travel time in seconds, parsed from the `"<n>s"` duration string
    #[must_use]
    pub fn duration_secs(&self) -> Option<u64> {
        self.duration
            .as_deref()
            .and_then(|d| d.strip_suffix('s'))
            .and_then(|d| d.parse().ok())
    }
}

/// Response of the compute-routes endpoint
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutesResponse {
    /// Candidate routes; empty when no route exists
    #[serde(default)]
    pub routes: Vec<Route>,
}
