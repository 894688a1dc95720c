/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::ResourceResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered query or form parameters; a key may repeat for array values
pub type Params = Vec<(String, String)>;

/// Body of an outgoing request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON body
    Json(Value),
    /// `application/x-www-form-urlencoded` body
    Form(Params),
}

/// Description of one call against the UFood API
///
/// Built once with the constructor for the HTTP method, then refined with
/// the `with_*` methods before being handed to
/// [`HttpClient::request`](crate::model::http::HttpClient::request).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API base URL
    pub path: String,
    /// Query parameters
    pub query: Params,
    /// Request body
    pub body: RequestBody,
    /// Fail with `Unauthenticated` before sending when no credential is stored
    pub requires_auth: bool,
}

impl RequestSpec {
    /// Creates a spec with no query, no body and no auth requirement
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            requires_auth: false,
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Marks the request as requiring a stored credential
    #[must_use]
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Sets the query parameters
    #[must_use]
    pub fn with_query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    /// Sets a JSON body
    ///
    /// # Returns
    /// * `Err(AppError::Decode)` - `body` cannot be represented as JSON
    pub fn with_json<B: Serialize>(mut self, body: &B) -> ResourceResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Sets a form-encoded body
    #[must_use]
    pub fn with_form(mut self, form: Params) -> Self {
        self.body = RequestBody::Form(form);
        self
    }
}

/// Optional restaurant search criteria
///
/// Only the fields that are set (and non-empty / non-zero) end up in the
/// query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Free text query
    pub q: Option<String>,
    /// Genres; each one becomes its own `genres` parameter
    pub genres: Vec<String>,
    /// Price range (1 to 5)
    pub price_range: Option<u8>,
    /// Latitude used to sort by distance
    pub lat: Option<f64>,
    /// Longitude used to sort by distance
    pub lon: Option<f64>,
}

impl FilterSet {
    /// Empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free text query
    #[must_use]
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Sets the genres
    #[must_use]
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the price range
    #[must_use]
    pub fn with_price_range(mut self, price_range: u8) -> Self {
        self.price_range = Some(price_range);
        self
    }

    /// Sets the coordinates
    #[must_use]
    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }

    /// Serializes the filters with the pagination parameters
    ///
    /// Same as [`build_query`].
    pub fn to_query(&self, limit: u32, page: u32) -> Params {
        build_query(self, limit, page)
    }
}

/// Joins `segments` into an absolute path, percent-encoding each one
///
/// Ids are passed as segments so that `/`, `?` or `#` inside an id stay part
/// of that segment.
///
/// ```rust
/// use ufood_client::model::requests::resource_path;
///
/// assert_eq!(resource_path(&["favorites", "f1/restaurants"]), "/favorites/f1%2Frestaurants");
/// ```
pub fn resource_path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|segment| format!("/{}", urlencoding::encode(segment)))
        .collect()
}

/// Builds the query string of a restaurant search
///
/// `limit` and `page` are always present. `q`, `genres`, `price_range`,
/// `lat` and `lon` are only emitted when set and non-empty / non-zero.
/// Keys come out in that order.
pub fn build_query(filters: &FilterSet, limit: u32, page: u32) -> Params {
    let mut params: Params = vec![
        ("limit".to_string(), limit.to_string()),
        ("page".to_string(), page.to_string()),
    ];

    if let Some(q) = filters.q.as_deref().filter(|q| !q.trim().is_empty()) {
        params.push(("q".to_string(), q.to_string()));
    }
    for genre in filters.genres.iter().filter(|g| !g.trim().is_empty()) {
        params.push(("genres".to_string(), genre.clone()));
    }
    if let Some(price_range) = filters.price_range.filter(|p| *p != 0) {
        params.push(("price_range".to_string(), price_range.to_string()));
    }
    if let Some(lat) = non_zero(filters.lat) {
        params.push(("lat".to_string(), lat.to_string()));
    }
    if let Some(lon) = non_zero(filters.lon) {
        params.push(("lon".to_string(), lon.to_string()));
    }
    params
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

/// Builds the query string of the user listing
///
/// `q` is omitted when blank.
pub fn build_user_query(limit: u32, page: u32, q: &str) -> Params {
    let mut params: Params = vec![
        ("limit".to_string(), limit.to_string()),
        ("page".to_string(), page.to_string()),
    ];
    if !q.trim().is_empty() {
        params.push(("q".to_string(), q.to_string()));
    }
    params
}

/// Form fields of the signup request
pub fn signup_form(name: &str, email: &str, password: &str) -> Params {
    vec![
        ("name".to_string(), name.to_string()),
        ("email".to_string(), email.to_string()),
        ("password".to_string(), password.to_string()),
    ]
}

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account email
    pub email: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Body carrying a single name (favorite list create/rename)
#[derive(Debug, Clone, Serialize)]
pub struct NameRequest<'a> {
    /// New name
    pub name: &'a str,
}

/// Body carrying a single id (follow a user, add a restaurant to a list)
#[derive(Debug, Clone, Serialize)]
pub struct IdRequest<'a> {
    /// Target id
    pub id: &'a str,
}

/// Body of `POST /users/{id}/restaurants/visits`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVisit {
    /// Visited restaurant
    pub restaurant_id: String,
    /// Free text review
    pub comment: String,
    /// Rating (1 to 5)
    pub rating: u8,
    /// Visit date as sent by the UI (ISO 8601)
    pub date: String,
}
