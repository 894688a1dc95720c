/// Routes API models
pub mod directions;
/// Favorite list models
pub mod favorite;
/// Restaurant models
pub mod restaurant;
/// Serialization utilities for API responses
pub mod serialization;
/// UI facade with default-on-failure policy
pub mod ui;
/// User profile models
pub mod user;
/// Visit models
pub mod visit;

pub use directions::{RouteRequest, RoutesResponse, TravelMode};
pub use favorite::{FavoriteList, FavoriteListSummary, FavoriteRestaurant};
pub use restaurant::{Location, Restaurant};
pub use ui::UiClient;
pub use user::{User, UserRef};
pub use visit::Visit;
