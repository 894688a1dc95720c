/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authenticated HTTP client for the UFood API
//!
//! [`HttpClient`] is the single point every outbound call goes through. It
//! enforces the authentication policy of a [`RequestSpec`], builds the URL
//! against the configured base origin, attaches the bearer token and
//! classifies the response into [`ResourceResult`].

use crate::application::config::Config;
use crate::constants::{UNSECURE_PREFIX, USER_AGENT};
use crate::error::{AppError, ResourceResult};
use crate::model::requests::{FilterSet, Params, RequestBody, RequestSpec, build_query};
use crate::session::auth::Session;
use chrono::Duration;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration as StdDuration;
use tracing::{debug, error, warn};

/// Authenticated resource client
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    session: Session,
}

impl HttpClient {
    /// Creates a client with an in-memory session
    ///
    /// # Arguments
    /// * `config` - API endpoints, timeout and token lifetime
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use, not logged in
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> ResourceResult<Self> {
        let session = Session::in_memory(Duration::hours(config.session.token_ttl_hours));
        Self::with_session(config, session)
    }

    /// Creates a client on top of an existing session
    ///
    /// Use this to plug a persistent [`SessionStore`](crate::session::interface::SessionStore)
    /// or to share a session between clients.
    pub fn with_session(config: Config, session: Session) -> ResourceResult<Self> {
        let http_client = build_http_client(&config)?;
        Ok(Self {
            http_client,
            config: Arc::new(config),
            session,
        })
    }

    /// Issues the request described by `spec` and decodes the JSON body into `T`
    ///
    /// # Returns
    /// * `Err(AppError::Unauthenticated)` - `spec.requires_auth` and no credential (nothing is sent)
    /// * `Err(AppError::Http)` - Non-2xx status
    /// * `Err(AppError::Transport)` - The request could not be completed
    /// * `Err(AppError::Decode)` - The body is not valid JSON for `T`
    pub async fn request<T: DeserializeOwned>(&self, spec: &RequestSpec) -> ResourceResult<T> {
        let response = self.send(spec).await?;
        parse_response(response).await
    }

    /// Issues the request and returns the raw JSON body
    pub async fn request_json(&self, spec: &RequestSpec) -> ResourceResult<Value> {
        self.request(spec).await
    }

    /// Issues the request and discards the body
    ///
    /// For endpoints whose success carries no useful payload (deletes, updates).
    pub async fn execute(&self, spec: &RequestSpec) -> ResourceResult<()> {
        self.send(spec).await.map(|_| ())
    }

    /// POSTs `body` to the routes API with its static key
    ///
    /// The user's bearer token is never sent to this origin.
    pub async fn post_directions<B: Serialize, T: DeserializeOwned>(
        &self,
        body: &B,
    ) -> ResourceResult<T> {
        let directions = &self.config.directions;
        if directions.api_key.is_empty() {
            return Err(AppError::MissingArgument(
                "Routes API key is not configured.".to_string(),
            ));
        }

        let body = RequestBody::Json(serde_json::to_value(body)?);
        let headers = vec![
            ("X-Goog-Api-Key", directions.api_key.clone()),
            ("X-Goog-FieldMask", directions.field_mask.clone()),
        ];
        let response = make_http_request(
            &self.http_client,
            Method::POST,
            &directions.url,
            headers,
            &[],
            &body,
        )
        .await?;
        parse_response(response).await
    }

    async fn send(&self, spec: &RequestSpec) -> ResourceResult<Response> {
        let credential = self.session.credential();
        if spec.requires_auth && credential.is_none() {
            warn!("{} {} rejected: no credential", spec.method, spec.path);
            return Err(AppError::Unauthenticated);
        }

        let url = self.url_for(&spec.path);
        let mut headers = vec![("Accept", String::from("application/json"))];
        if let Some(credential) = credential {
            headers.push(("Authorization", credential.bearer()));
        }

        make_http_request(
            &self.http_client,
            spec.method.clone(),
            &url,
            headers,
            &spec.query,
            &spec.body,
        )
        .await
    }

    /// Resolves `path` against the configured base URL
    ///
    /// Absolute URLs are not honored: every request stays on the UFood origin.
    fn url_for(&self, path: &str) -> String {
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Prefixes `path` with `/unsecure` when no credential is stored
    ///
    /// Endpoints readable by anonymous users live under `/unsecure`; the same
    /// endpoints without prefix return personalized data for logged in users.
    #[must_use]
    pub fn scoped_path(&self, path: &str) -> String {
        if self.is_authenticated() {
            path.to_string()
        } else {
            format!("{UNSECURE_PREFIX}{path}")
        }
    }

    /// Builds the restaurant search query; see [`build_query`]
    #[must_use]
    pub fn build_query(filters: &FilterSet, limit: u32, page: u32) -> Params {
        build_query(filters, limit, page)
    }

    /// Stores a new bearer token
    pub fn set_credential(&self, token: &str) {
        self.session.set_credential(token);
    }

    /// Removes the bearer token and every session-derived value
    pub fn clear_credential(&self) {
        self.session.clear_credential();
    }

    /// True iff a credential is currently stored
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Session backing this client
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Configuration of this client
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        let config = Config::default();
        let session = Session::in_memory(Duration::hours(config.session.token_ttl_hours));
        let http_client = build_http_client(&config).unwrap_or_else(|e| {
            error!("Failed to build configured HTTP client, using defaults: {}", e);
            Client::new()
        });
        Self {
            http_client,
            config: Arc::new(config),
            session,
        }
    }
}

fn build_http_client(config: &Config) -> ResourceResult<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(StdDuration::from_secs(config.rest_api.timeout))
        .build()?)
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> ResourceResult<T> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        error!("Failed to decode response body: {}", e);
        AppError::Decode(e.to_string())
    })
}

/// Sends one HTTP request and classifies the response
///
/// No retry is attempted: every failure is returned once to the caller.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - `(name, value)` pairs added to the request
/// * `query` - Query parameters, appended in order
/// * `body` - Request body
///
/// # Returns
///
/// * `Ok(Response)` - 2xx response, body not yet read
/// * `Err(AppError::Http)` - Non-2xx response, carrying status and body text
/// * `Err(AppError::Transport)` - The request could not be sent or completed
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, String)>,
    query: &[(String, String)],
    body: &RequestBody,
) -> ResourceResult<Response> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    for (name, value) in &headers {
        request = request.header(*name, value);
    }
    if !query.is_empty() {
        request = request.query(query);
    }
    request = match body {
        RequestBody::Empty => request,
        RequestBody::Json(value) => request.json(value),
        RequestBody::Form(fields) => request.form(fields),
    };

    let response = request.send().await.map_err(|e| {
        error!("Request to {} failed: {}", url, e);
        AppError::Transport(e.to_string())
    })?;

    let status = response.status();
    debug!("Response status: {}", status);
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::http(status, body))
}
