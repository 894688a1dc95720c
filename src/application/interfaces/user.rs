use crate::error::ResourceResult;
use crate::model::responses::Page;
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for user profiles and the follow graph
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists users, optionally filtered by the free text `q`
    async fn get_all_users(&self, limit: u32, page: u32, q: &str) -> ResourceResult<Page<User>>;

    /// Gets a user profile
    ///
    /// # Arguments
    /// * `user_id` - Profile to fetch; `None` means the logged in user
    async fn get_user_by_id(&self, user_id: Option<&str>) -> ResourceResult<User>;

    /// Follows a user; returns the updated profile of the logged in user
    async fn follow_user(&self, user_id: &str) -> ResourceResult<User>;

    /// Unfollows a user; returns the updated profile of the logged in user
    async fn unfollow_user(&self, user_id: &str) -> ResourceResult<User>;
}
