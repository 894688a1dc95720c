use crate::error::ResourceResult;
use crate::presentation::directions::{RouteRequest, RoutesResponse};
use async_trait::async_trait;

/// Interface for the third-party routes API
#[async_trait]
pub trait DirectionsService: Send + Sync {
    /// Computes routes (duration, distance, polyline) between two waypoints
    async fn get_directions(&self, request: &RouteRequest) -> ResourceResult<RoutesResponse>;
}
