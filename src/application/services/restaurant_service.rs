use crate::application::client::Client;
use crate::application::interfaces::restaurant::{RestaurantService, VisitService};
use crate::error::ResourceResult;
use crate::model::requests::{FilterSet, NewVisit, RequestSpec, build_query, resource_path};
use crate::model::responses::Page;
use crate::presentation::restaurant::Restaurant;
use crate::presentation::visit::Visit;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl RestaurantService for Client {
    async fn get_restaurants(
        &self,
        limit: u32,
        page: u32,
        filters: &FilterSet,
    ) -> ResourceResult<Page<Restaurant>> {
        let path = self.http_client().scoped_path("/restaurants");
        let spec = RequestSpec::get(path).with_query(build_query(filters, limit, page));
        let restaurants: Page<Restaurant> = self.http_client().request(&spec).await?;
        debug!(
            "Restaurants obtained: {} of {:?}",
            restaurants.items.len(),
            restaurants.total
        );
        Ok(restaurants)
    }

    async fn get_restaurant_by_id(&self, restaurant_id: &str) -> ResourceResult<Restaurant> {
        let path = self
            .http_client()
            .scoped_path(&resource_path(&["restaurants", restaurant_id]));
        self.http_client().request(&RequestSpec::get(path)).await
    }

    async fn get_similar_restaurants(
        &self,
        genres: &[String],
        limit: u32,
    ) -> ResourceResult<Vec<Restaurant>> {
        let filters = FilterSet::new().with_genres(genres.iter().cloned());
        Ok(self.get_restaurants(limit, 0, &filters).await?.items)
    }
}

#[async_trait]
impl VisitService for Client {
    async fn get_user_visits(
        &self,
        user_id: Option<&str>,
        limit: u32,
        page: u32,
    ) -> ResourceResult<Vec<Visit>> {
        self.require_auth()?;
        let user_id = self.resolve_user_id(user_id)?;
        let path = resource_path(&["users", user_id.as_str(), "restaurants", "visits"]);
        let spec = RequestSpec::get(path)
            .authenticated()
            .with_query(vec![
                ("limit".to_string(), limit.to_string()),
                ("page".to_string(), page.to_string()),
            ]);
        let visits: Page<Visit> = self.http_client().request(&spec).await?;
        Ok(visits.items)
    }

    async fn get_visits_by_restaurant_id(
        &self,
        restaurant_id: &str,
        user_id: Option<&str>,
    ) -> ResourceResult<Page<Visit>> {
        self.require_auth()?;
        let user_id = self.resolve_user_id(user_id)?;
        let spec = RequestSpec::get(resource_path(&[
            "users",
            user_id.as_str(),
            "restaurants",
            restaurant_id,
            "visits",
        ]))
        .authenticated();
        self.http_client().request(&spec).await
    }

    async fn create_visit(
        &self,
        user_id: Option<&str>,
        visit: &NewVisit,
    ) -> ResourceResult<Visit> {
        self.require_auth()?;
        let user_id = self.resolve_user_id(user_id)?;
        info!("Creating visit at restaurant: {}", visit.restaurant_id);
        let path = resource_path(&["users", user_id.as_str(), "restaurants", "visits"]);
        let spec = RequestSpec::post(path)
            .authenticated()
            .with_json(visit)?;
        let created: Visit = self.http_client().request(&spec).await?;
        debug!("Visit created: {}", created.id);
        Ok(created)
    }
}
