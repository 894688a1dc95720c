use crate::application::client::Client;
use crate::application::interfaces::user::UserService;
use crate::error::ResourceResult;
use crate::model::requests::{IdRequest, RequestSpec, build_user_query, resource_path};
use crate::model::responses::Page;
use crate::presentation::user::User;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl UserService for Client {
    async fn get_all_users(&self, limit: u32, page: u32, q: &str) -> ResourceResult<Page<User>> {
        let path = self.http_client().scoped_path("/users");
        let spec = RequestSpec::get(path).with_query(build_user_query(limit, page, q));
        let users: Page<User> = self.http_client().request(&spec).await?;
        debug!("Users obtained: {}", users.items.len());
        Ok(users)
    }

    async fn get_user_by_id(&self, user_id: Option<&str>) -> ResourceResult<User> {
        let user_id = self.resolve_user_id(user_id)?;
        let path = self
            .http_client()
            .scoped_path(&resource_path(&["users", user_id.as_str()]));
        self.http_client().request(&RequestSpec::get(path)).await
    }

    async fn follow_user(&self, user_id: &str) -> ResourceResult<User> {
        info!("Following user: {}", user_id);
        let spec = RequestSpec::post("/follow")
            .authenticated()
            .with_json(&IdRequest { id: user_id })?;
        self.http_client().request(&spec).await
    }

    async fn unfollow_user(&self, user_id: &str) -> ResourceResult<User> {
        info!("Unfollowing user: {}", user_id);
        let spec = RequestSpec::delete(resource_path(&["follow", user_id])).authenticated();
        self.http_client().request(&spec).await
    }
}
