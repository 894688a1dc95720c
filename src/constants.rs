/// Default base URL of the UFood REST API
pub const DEFAULT_API_BASE_URL: &str = "https://ufoodapi.herokuapp.com";
/// Default endpoint of the routes computation API
pub const DEFAULT_DIRECTIONS_URL: &str =
    "https://routes.googleapis.com/directions/v2:computeRoutes";
/// Field mask sent to the routes API: only duration, distance and polyline are requested
pub const DIRECTIONS_FIELD_MASK: &str =
    "routes.duration,routes.distanceMeters,routes.polyline.encodedPolyline";
/// Path prefix used for anonymous access to endpoints that also accept authenticated calls
pub const UNSECURE_PREFIX: &str = "/unsecure";
/// User agent string used in HTTP requests
pub const USER_AGENT: &str = "ufood-client/0.1.0";
/// Default timeout in seconds for REST requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Lifetime of a stored bearer token, in hours (one day)
pub const TOKEN_TTL_HOURS: i64 = 24;
/// Default page size for paginated endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Default page index for paginated endpoints (pages start at zero)
pub const DEFAULT_PAGE: u32 = 0;
/// Name of the favorite list created for new users
pub const DEFAULT_FAVORITE_LIST_NAME: &str = "My Favorites";

/// Session store key holding the bearer token
pub const TOKEN_KEY: &str = "token";
/// Session store key holding the logged in user id
pub const USER_ID_KEY: &str = "userId";
/// Session store key holding the cached user object (JSON)
pub const USER_KEY: &str = "user";
/// Session store key holding the selected favorite list id
pub const SELECTED_FAVORITE_LIST_KEY: &str = "selectedFavoriteListId";
