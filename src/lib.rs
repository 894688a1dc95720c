/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # UFood Client
//!
//! A Rust client for the UFood restaurant discovery API.
//!
//! Every operation exposed by this crate goes through a single
//! authenticated HTTP client ([`model::http::HttpClient`]) that:
//! - attaches the stored bearer token when the user is logged in
//! - rejects calls that require authentication before touching the network
//! - serializes query strings and bodies
//! - turns every failure into an [`error::AppError`] with a stable [`error::ErrorKind`]
//!
//! Resource operations (login, restaurants, visits, favorite lists, follows
//! and directions) are grouped into service traits under
//! [`application::interfaces`] and implemented by [`application::client::Client`].
//!
//! ## Example
//! ```ignore
//! use ufood_client::prelude::*;
//!
//! let client = Client::default();
//! client.login("jane@example.com", "secret").await?;
//! let page = client.get_restaurants(10, 0, &FilterSet::new().with_query("pizza")).await?;
//! for restaurant in page.items {
//!     println!("{}", restaurant.name);
//! }
//! ```

/// Application layer: configuration, client and resource services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP transport, request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain models returned by the API and the UI facade
pub mod presentation;
/// Session storage (credential and session-derived values)
pub mod session;
/// Utilities (environment, logging, fallbacks)
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
///
/// # Returns
///
/// The version string of the crate
pub fn version() -> &'static str {
    VERSION
}
