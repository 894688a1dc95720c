use crate::error::ResourceResult;
use crate::presentation::favorite::{FavoriteList, FavoriteListSummary, FavoriteRestaurant};
use async_trait::async_trait;

/// Interface for favorite lists
#[async_trait]
pub trait FavoriteService: Send + Sync {
    /// Creates a list
    async fn create_favorite_list(&self, name: &str) -> ResourceResult<FavoriteList>;

    /// Renames a list
    async fn update_favorite_list(&self, list_id: &str, name: &str) -> ResourceResult<()>;

    /// Deletes a list
    async fn delete_favorite_list(&self, list_id: &str) -> ResourceResult<()>;

    /// Gets the restaurants of a list
    ///
    /// # Arguments
    /// * `list_id` - List to read; `None` means the selected list
    ///
    /// # Returns
    /// * `Err(AppError::MissingArgument)` - No list given and none selected
    async fn get_favorite_restaurants(
        &self,
        list_id: Option<&str>,
    ) -> ResourceResult<Vec<FavoriteRestaurant>>;

    /// Gets the `{id, name}` of every list of the logged in user
    ///
    /// Resolves the user id from the token first; the lists are not
    /// requested when that lookup fails.
    async fn get_user_favorite_lists(&self) -> ResourceResult<Vec<FavoriteListSummary>>;

    /// Adds a restaurant to a list; returns the updated list
    async fn add_favorite_restaurant(
        &self,
        list_id: &str,
        restaurant_id: &str,
    ) -> ResourceResult<FavoriteList>;

    /// Removes a restaurant from a list
    async fn remove_favorite_restaurant(
        &self,
        list_id: &str,
        restaurant_id: &str,
    ) -> ResourceResult<()>;
}
