use crate::error::ResourceResult;
use crate::model::responses::LoginResponse;
use crate::presentation::favorite::FavoriteList;
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for authentication and session operations
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in and stores the returned token (1 day) and user id
    async fn login(&self, email: &str, password: &str) -> ResourceResult<LoginResponse>;

    /// Logs out
    ///
    /// The server call is best-effort: the local session is cleared even
    /// when it fails, and this method then still returns `Ok(())`.
    async fn logout(&self) -> ResourceResult<()>;

    /// Creates an account; the body is sent form-encoded
    async fn register(&self, name: &str, email: &str, password: &str) -> ResourceResult<User>;

    /// Gets the logged in user from the token info endpoint and caches it
    async fn get_user_info(&self) -> ResourceResult<User>;

    /// Creates the "My Favorites" list and selects it
    async fn create_default_favorite_list(&self) -> ResourceResult<FavoriteList>;
}
