use crate::error::ResourceResult;
use crate::model::requests::{FilterSet, NewVisit};
use crate::model::responses::Page;
use crate::presentation::restaurant::Restaurant;
use crate::presentation::visit::Visit;
use async_trait::async_trait;

/// Interface for restaurant search
#[async_trait]
pub trait RestaurantService: Send + Sync {
    /// Searches restaurants
    ///
    /// # Arguments
    /// * `limit` - Page size
    /// * `page` - Page index, starting at zero
    /// * `filters` - Optional criteria; unset fields are not sent
    async fn get_restaurants(
        &self,
        limit: u32,
        page: u32,
        filters: &FilterSet,
    ) -> ResourceResult<Page<Restaurant>>;

    /// Gets one restaurant
    async fn get_restaurant_by_id(&self, restaurant_id: &str) -> ResourceResult<Restaurant>;

    /// Gets the first `limit` restaurants sharing any of `genres`
    async fn get_similar_restaurants(
        &self,
        genres: &[String],
        limit: u32,
    ) -> ResourceResult<Vec<Restaurant>>;
}

/// Interface for visits and reviews
///
/// `user_id` arguments default to the logged in user when `None`.
#[async_trait]
pub trait VisitService: Send + Sync {
    /// Gets a page of a user's visits
    async fn get_user_visits(
        &self,
        user_id: Option<&str>,
        limit: u32,
        page: u32,
    ) -> ResourceResult<Vec<Visit>>;

    /// Gets a user's visits to one restaurant
    async fn get_visits_by_restaurant_id(
        &self,
        restaurant_id: &str,
        user_id: Option<&str>,
    ) -> ResourceResult<Page<Visit>>;

    /// Records a visit
    async fn create_visit(&self, user_id: Option<&str>, visit: &NewVisit)
    -> ResourceResult<Visit>;
}
