use crate::application::client::Client;
use crate::application::interfaces::favorite::FavoriteService;
use crate::error::{AppError, ResourceResult};
use crate::model::requests::{IdRequest, NameRequest, RequestSpec, resource_path};
use crate::model::responses::Page;
use crate::presentation::favorite::{FavoriteList, FavoriteListSummary, FavoriteRestaurant};
use crate::presentation::user::UserRef;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl FavoriteService for Client {
    async fn create_favorite_list(&self, name: &str) -> ResourceResult<FavoriteList> {
        info!("Creating favorite list: {}", name);
        let spec = RequestSpec::post("/favorites")
            .authenticated()
            .with_json(&NameRequest { name })?;
        self.http_client().request(&spec).await
    }

    async fn update_favorite_list(&self, list_id: &str, name: &str) -> ResourceResult<()> {
        info!("Renaming favorite list {} to {}", list_id, name);
        let spec = RequestSpec::put(resource_path(&["favorites", list_id]))
            .authenticated()
            .with_json(&NameRequest { name })?;
        self.http_client().execute(&spec).await
    }

    async fn delete_favorite_list(&self, list_id: &str) -> ResourceResult<()> {
        info!("Deleting favorite list: {}", list_id);
        let spec = RequestSpec::delete(resource_path(&["favorites", list_id])).authenticated();
        self.http_client().execute(&spec).await?;
        if self.selected_favorite_list_id().as_deref() == Some(list_id) {
            self.session().clear_selected_favorite_list();
        }
        Ok(())
    }

    async fn get_favorite_restaurants(
        &self,
        list_id: Option<&str>,
    ) -> ResourceResult<Vec<FavoriteRestaurant>> {
        self.require_auth()?;
        let list_id = self.resolve_favorite_list_id(list_id)?;
        let spec = RequestSpec::get(resource_path(&["favorites", list_id.as_str()]))
            .authenticated();
        let list: FavoriteList = self.http_client().request(&spec).await?;
        debug!("Favorite list {} has {} restaurants", list.id, list.restaurants.len());
        Ok(list.restaurants)
    }

    async fn get_user_favorite_lists(&self) -> ResourceResult<Vec<FavoriteListSummary>> {
        let me: UserRef = self
            .http_client()
            .request(&RequestSpec::get("/tokenInfo").authenticated())
            .await?;
        if me.id.trim().is_empty() {
            return Err(AppError::Decode("Token info carries no user id.".to_string()));
        }

        let path = resource_path(&["users", me.id.as_str(), "favorites"]);
        let spec = RequestSpec::get(path).authenticated();
        let lists: Page<FavoriteListSummary> = self.http_client().request(&spec).await?;
        debug!("Favorite lists obtained for {}: {}", me.id, lists.items.len());
        Ok(lists.items)
    }

    async fn add_favorite_restaurant(
        &self,
        list_id: &str,
        restaurant_id: &str,
    ) -> ResourceResult<FavoriteList> {
        info!("Adding restaurant {} to favorite list {}", restaurant_id, list_id);
        let spec = RequestSpec::post(resource_path(&["favorites", list_id, "restaurants"]))
            .authenticated()
            .with_json(&IdRequest { id: restaurant_id })?;
        self.http_client().request(&spec).await
    }

    async fn remove_favorite_restaurant(
        &self,
        list_id: &str,
        restaurant_id: &str,
    ) -> ResourceResult<()> {
        info!("Removing restaurant {} from favorite list {}", restaurant_id, list_id);
        let spec = RequestSpec::delete(resource_path(&[
            "favorites",
            list_id,
            "restaurants",
            restaurant_id,
        ]))
        .authenticated();
        self.http_client().execute(&spec).await
    }
}
