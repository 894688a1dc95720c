/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! UI-facing facade with a fixed default-on-failure policy
//!
//! The service traits return [`ResourceResult`] and let the caller decide.
//! Views usually want a value they can render right away, so [`UiClient`]
//! applies one rule per return shape and logs every swallowed error:
//!
//! | Return shape | On failure |
//! |---|---|
//! | collection (`Vec`) | empty collection |
//! | single object | `None` |
//! | delete / update / remove | `false` |
//! | login, register | error is returned unchanged |
//! | logout | always `true`; the local session is cleared regardless |

use crate::application::client::Client;
use crate::application::services::{
    AuthService, DirectionsService, FavoriteService, RestaurantService, UserService, VisitService,
};
use crate::error::ResourceResult;
use crate::model::requests::{FilterSet, NewVisit};
use crate::model::responses::{LoginResponse, Page};
use crate::presentation::directions::{RouteRequest, RoutesResponse};
use crate::presentation::favorite::{FavoriteList, FavoriteListSummary, FavoriteRestaurant};
use crate::presentation::restaurant::Restaurant;
use crate::presentation::user::User;
use crate::presentation::visit::Visit;
use crate::utils::fallback::{FallbackExt, succeeded};

/// Facade over [`Client`] returning render-ready values
#[derive(Clone, Default)]
pub struct UiClient {
    client: Client,
}

impl UiClient {
    /// Wraps a client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Underlying client, for callers that want the full error
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// True iff a credential is stored
    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }

    /// Logs in; errors are returned so the form can display them
    pub async fn login(&self, email: &str, password: &str) -> ResourceResult<LoginResponse> {
        self.client.login(email, password).await
    }

    /// Logs out; always succeeds locally
    pub async fn logout(&self) -> bool {
        succeeded(self.client.logout().await, "Logout error")
    }

    /// Creates an account; errors are returned so the form can display them
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ResourceResult<User> {
        self.client.register(name, email, password).await
    }

    /// Creates and selects the default favorite list
    pub async fn create_default_favorite_list(&self) -> Option<FavoriteList> {
        self.client
            .create_default_favorite_list()
            .await
            .ok_logged("Error creating default favorite list")
    }

    /// Logged in user
    pub async fn get_user_info(&self) -> Option<User> {
        self.client.get_user_info().await.ok_logged("User info error")
    }

    /// Users matching `q`
    pub async fn get_all_users(&self, limit: u32, page: u32, q: &str) -> Vec<User> {
        self.client
            .get_all_users(limit, page, q)
            .await
            .map(|p| p.items)
            .or_default_logged("Error fetching users")
    }

    /// User profile; `None` id means the logged in user
    pub async fn get_user_by_id(&self, user_id: Option<&str>) -> Option<User> {
        self.client
            .get_user_by_id(user_id)
            .await
            .ok_logged("Error fetching user details")
    }

    /// Restaurant search
    pub async fn get_restaurants(
        &self,
        limit: u32,
        page: u32,
        filters: &FilterSet,
    ) -> Option<Page<Restaurant>> {
        self.client
            .get_restaurants(limit, page, filters)
            .await
            .ok_logged("Error getting restaurants")
    }

    /// One restaurant
    pub async fn get_restaurant_by_id(&self, restaurant_id: &str) -> Option<Restaurant> {
        self.client
            .get_restaurant_by_id(restaurant_id)
            .await
            .ok_logged("Error fetching restaurant details")
    }

    /// Restaurants sharing a genre
    pub async fn get_similar_restaurants(&self, genres: &[String], limit: u32) -> Vec<Restaurant> {
        self.client
            .get_similar_restaurants(genres, limit)
            .await
            .or_default_logged("Error getting similar restaurants")
    }

    /// A user's visits
    pub async fn get_user_visits(&self, user_id: Option<&str>, limit: u32, page: u32) -> Vec<Visit> {
        self.client
            .get_user_visits(user_id, limit, page)
            .await
            .or_default_logged("Error fetching user visits")
    }

    /// A user's visits to one restaurant
    pub async fn get_visits_by_restaurant_id(
        &self,
        restaurant_id: &str,
        user_id: Option<&str>,
    ) -> Vec<Visit> {
        self.client
            .get_visits_by_restaurant_id(restaurant_id, user_id)
            .await
            .map(|p| p.items)
            .or_default_logged("Error fetching restaurant visits")
    }

    /// Records a visit
    pub async fn create_visit(&self, user_id: Option<&str>, visit: &NewVisit) -> Option<Visit> {
        self.client
            .create_visit(user_id, visit)
            .await
            .ok_logged("Error creating user visit")
    }

    /// Creates a favorite list
    pub async fn create_favorite_list(&self, name: &str) -> Option<FavoriteList> {
        self.client
            .create_favorite_list(name)
            .await
            .ok_logged("Error creating favorite list")
    }

    /// Renames a favorite list
    pub async fn update_favorite_list(&self, list_id: &str, name: &str) -> bool {
        succeeded(
            self.client.update_favorite_list(list_id, name).await,
            "Error modifying favorite list",
        )
    }

    /// Deletes a favorite list
    pub async fn delete_favorite_list(&self, list_id: &str) -> bool {
        succeeded(
            self.client.delete_favorite_list(list_id).await,
            "Error deleting favorite list",
        )
    }

    /// Restaurants of a list; `None` means the selected list
    pub async fn get_favorite_restaurants(&self, list_id: Option<&str>) -> Vec<FavoriteRestaurant> {
        self.client
            .get_favorite_restaurants(list_id)
            .await
            .or_default_logged("Error fetching favorites")
    }

    /// `{id, name}` of the logged in user's lists
    pub async fn get_user_favorite_lists(&self) -> Vec<FavoriteListSummary> {
        self.client
            .get_user_favorite_lists()
            .await
            .or_default_logged("Error fetching favorite lists")
    }

    /// Adds a restaurant to a list
    pub async fn add_favorite_restaurant(
        &self,
        list_id: &str,
        restaurant_id: &str,
    ) -> Option<FavoriteList> {
        self.client
            .add_favorite_restaurant(list_id, restaurant_id)
            .await
            .ok_logged("Error adding favorite")
    }

    /// Removes a restaurant from a list
    pub async fn remove_favorite_restaurant(&self, list_id: &str, restaurant_id: &str) -> bool {
        succeeded(
            self.client
                .remove_favorite_restaurant(list_id, restaurant_id)
                .await,
            "Error removing favorite",
        )
    }

    /// Follows a user
    pub async fn follow_user(&self, user_id: &str) -> Option<User> {
        self.client
            .follow_user(user_id)
            .await
            .ok_logged("Error following user")
    }

    /// Unfollows a user
    pub async fn unfollow_user(&self, user_id: &str) -> Option<User> {
        self.client
            .unfollow_user(user_id)
            .await
            .ok_logged("Error unfollowing user")
    }

    /// Route between two points
    pub async fn get_directions(&self, request: &RouteRequest) -> Option<RoutesResponse> {
        self.client
            .get_directions(request)
            .await
            .ok_logged("Error computing directions")
    }
}
