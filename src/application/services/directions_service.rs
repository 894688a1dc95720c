use crate::application::client::Client;
use crate::application::interfaces::directions::DirectionsService;
use crate::error::ResourceResult;
use crate::presentation::directions::{RouteRequest, RoutesResponse};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl DirectionsService for Client {
    async fn get_directions(&self, request: &RouteRequest) -> ResourceResult<RoutesResponse> {
        let routes: RoutesResponse = self.http_client().post_directions(request).await?;
        debug!("Routes obtained: {}", routes.routes.len());
        Ok(routes)
    }
}
