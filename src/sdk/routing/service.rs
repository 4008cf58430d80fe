use super::error::RoutingError;
use super::route::RawRoute;
use crate::sdk::geo::GeoPoint;
use async_trait::async_trait;

#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Gets the first-ranked driving route from `from` to `to`.
    ///
    /// Direction matters: `from` is where the "depart" maneuver happens.
    async fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<RawRoute, RoutingError>;
}
