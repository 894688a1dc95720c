/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::error::{AppError, ResourceResult};
use crate::model::http::HttpClient;
use crate::session::auth::Session;
use std::sync::Arc;

/// UFood API client
///
/// Implements every service trait of
/// [`application::interfaces`](crate::application::interfaces) on top of a
/// shared [`HttpClient`].
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client with an in-memory session
    pub fn new(config: Config) -> ResourceResult<Self> {
        Ok(Self::from_http_client(Arc::new(HttpClient::new(config)?)))
    }

    /// Creates a client on top of an existing session
    pub fn with_session(config: Config, session: Session) -> ResourceResult<Self> {
        Ok(Self::from_http_client(Arc::new(HttpClient::with_session(
            config, session,
        )?)))
    }

    /// Wraps an existing HTTP client
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Underlying authenticated HTTP client
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Session of this client
    pub fn session(&self) -> &Session {
        self.http_client.session()
    }

    /// True iff a credential is stored
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.http_client.is_authenticated()
    }

    /// Id of the selected favorite list
    #[must_use]
    pub fn selected_favorite_list_id(&self) -> Option<String> {
        self.session().selected_favorite_list_id()
    }

    /// Selects the favorite list used when no list id is given
    pub fn select_favorite_list(&self, list_id: &str) {
        self.session().set_selected_favorite_list_id(list_id);
    }

    pub(crate) fn require_auth(&self) -> ResourceResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Unauthenticated)
        }
    }

    /// Returns `user_id`, or the stored id of the logged in user
    pub(crate) fn resolve_user_id(&self, user_id: Option<&str>) -> ResourceResult<String> {
        user_id
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .or_else(|| self.session().user_id())
            .ok_or_else(|| AppError::MissingArgument("No user id available.".to_string()))
    }

    /// Returns `list_id`, or the selected favorite list
    pub(crate) fn resolve_favorite_list_id(&self, list_id: Option<&str>) -> ResourceResult<String> {
        list_id
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .or_else(|| self.selected_favorite_list_id())
            .ok_or_else(|| AppError::MissingArgument("No favorite list selected.".to_string()))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::from_http_client(Arc::new(HttpClient::default()))
    }
}
