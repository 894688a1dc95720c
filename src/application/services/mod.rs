/// Module containing authentication and session operations
pub mod auth_service;
/// Module containing the routes API call
pub mod directions_service;
/// Module containing favorite list operations
pub mod favorite_service;
/// Module containing restaurant search and visit operations
pub mod restaurant_service;
/// Module containing user profile and follow operations
pub mod user_service;

pub use crate::application::interfaces::auth::AuthService;
pub use crate::application::interfaces::directions::DirectionsService;
pub use crate::application::interfaces::favorite::FavoriteService;
pub use crate::application::interfaces::restaurant::{RestaurantService, VisitService};
pub use crate::application::interfaces::user::UserService;
