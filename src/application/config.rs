/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_DIRECTIONS_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DIRECTIONS_FIELD_MASK, TOKEN_TTL_HOURS,
};
use crate::utils::config::{get_env_or_default, get_env_secret};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the UFood API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Routes (directions) API configuration
    pub directions: DirectionsConfig,
    /// Session configuration
    pub session: SessionConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the UFood REST API
pub struct RestApiConfig {
    /// Base URL for the UFood REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the third-party routes API
pub struct DirectionsConfig {
    /// Endpoint computing routes between two waypoints
    pub url: String,
    /// Static API key sent with every directions request
    pub api_key: String,
    /// Response field mask
    pub field_mask: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the stored credential
pub struct SessionConfig {
    /// Lifetime of the bearer token after login, in hours
    pub token_ttl_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// Loads the `.env` file when present, then reads:
    /// - `UFOOD_REST_BASE_URL`, `UFOOD_REST_TIMEOUT`
    /// - `ROUTES_API_URL`, `ROUTES_API_KEY`, `ROUTES_FIELD_MASK`
    /// - `UFOOD_TOKEN_TTL_HOURS`
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_secret("ROUTES_API_KEY").unwrap_or_default();

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "UFOOD_REST_BASE_URL",
                    String::from(DEFAULT_API_BASE_URL),
                ),
                timeout: get_env_or_default("UFOOD_REST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS),
            },
            directions: DirectionsConfig {
                url: get_env_or_default("ROUTES_API_URL", String::from(DEFAULT_DIRECTIONS_URL)),
                api_key,
                field_mask: get_env_or_default(
                    "ROUTES_FIELD_MASK",
                    String::from(DIRECTIONS_FIELD_MASK),
                ),
            },
            session: SessionConfig {
                token_ttl_hours: get_env_or_default("UFOOD_TOKEN_TTL_HOURS", TOKEN_TTL_HOURS),
            },
        }
    }

    /// Creates a configuration pointing both APIs at `base_url`
    ///
    /// Directions requests go to `{base_url}/directions`. No routes API key
    /// is set; assign `directions.api_key` before calling the routes API.
    /// Mostly useful against a local mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            },
            directions: DirectionsConfig {
                url: format!("{base_url}/directions"),
                api_key: String::new(),
                field_mask: String::from(DIRECTIONS_FIELD_MASK),
            },
            session: SessionConfig {
                token_ttl_hours: TOKEN_TTL_HOURS,
            },
        }
    }
}
