/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # UFood Client Prelude
//!
//! Convenient import of the most commonly used types and traits.
//!
//! ```rust
//! use ufood_client::prelude::*;
//!
//! let filters = FilterSet::new().with_query("sushi").with_price_range(2);
//! let query = build_query(&filters, 10, 0);
//! assert_eq!(query.len(), 4);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the UFood API client
pub use crate::application::config::{Config, DirectionsConfig, RestApiConfig, SessionConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, ErrorKind, ResourceResult};

// ============================================================================
// CLIENTS
// ============================================================================

/// Client implementing every service
pub use crate::application::client::Client;

/// Authenticated HTTP client
pub use crate::model::http::HttpClient;

/// UI facade
pub use crate::presentation::ui::UiClient;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::services::{
    AuthService, DirectionsService, FavoriteService, RestaurantService, UserService, VisitService,
};

// ============================================================================
// SESSION
// ============================================================================

pub use crate::session::auth::Session;
pub use crate::session::interface::{Credential, SessionStore};
pub use crate::session::store::MemorySessionStore;

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

pub use crate::model::requests::{FilterSet, NewVisit, RequestBody, RequestSpec, build_query};
pub use crate::model::responses::{LoginResponse, Page};
pub use crate::presentation::{
    FavoriteList, FavoriteListSummary, FavoriteRestaurant, Location, Restaurant, RouteRequest,
    RoutesResponse, TravelMode, User, UserRef, Visit,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
