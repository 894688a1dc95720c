use crate::application::client::Client;
use crate::application::interfaces::auth::AuthService;
use crate::application::interfaces::favorite::FavoriteService;
use crate::constants::DEFAULT_FAVORITE_LIST_NAME;
use crate::error::ResourceResult;
use crate::model::requests::{LoginRequest, RequestSpec, signup_form};
use crate::model::responses::LoginResponse;
use crate::presentation::favorite::FavoriteList;
use crate::presentation::user::User;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

#[async_trait]
impl AuthService for Client {
    async fn login(&self, email: &str, password: &str) -> ResourceResult<LoginResponse> {
        info!("Logging in");
        let spec = RequestSpec::post("/login").with_json(&LoginRequest { email, password })?;
        let response: LoginResponse = self.http_client().request(&spec).await?;

        let session = self.session();
        session.clear_credential();
        session.set_credential(&response.token);
        session.set_user_id(&response.id);

        info!("Login successful, user: {}", response.id);
        Ok(response)
    }

    async fn logout(&self) -> ResourceResult<()> {
        info!("Logging out");
        if self.is_authenticated() {
            let spec = RequestSpec::post("/logout").authenticated();
            match self.http_client().execute(&spec).await {
                Ok(()) => debug!("Server session closed"),
                Err(e) => warn!("Server logout failed, clearing local session anyway: {}", e),
            }
        }
        self.http_client().clear_credential();
        info!("Logged out");
        Ok(())
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> ResourceResult<User> {
        info!("Registering new user");
        let spec = RequestSpec::post("/signup").with_form(signup_form(name, email, password));
        let user: User = self.http_client().request(&spec).await?;
        debug!("User registered: {}", user.id);
        Ok(user)
    }

    async fn get_user_info(&self) -> ResourceResult<User> {
        let spec = RequestSpec::get("/tokenInfo").authenticated();
        let raw: Value = self.http_client().request(&spec).await?;
        let user: User = serde_json::from_value(raw.clone())?;
        self.session().set_cached_user(&raw);
        debug!("Token info obtained for user: {}", user.id);
        Ok(user)
    }

    async fn create_default_favorite_list(&self) -> ResourceResult<FavoriteList> {
        let list = self.create_favorite_list(DEFAULT_FAVORITE_LIST_NAME).await?;
        self.select_favorite_list(&list.id);
        debug!("Default favorite list created: {}", list.id);
        Ok(list)
    }
}
