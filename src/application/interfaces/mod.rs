/// Authentication and session service interface
pub mod auth;
/// Directions service interface
pub mod directions;
/// Favorite list service interface
pub mod favorite;
/// Restaurant and visit service interfaces
pub mod restaurant;
/// User and follow service interface
pub mod user;
