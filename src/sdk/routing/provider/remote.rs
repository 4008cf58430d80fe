use super::types::DirectionsResponse;
use crate::sdk::config::RouterConfig;
use crate::sdk::geo::GeoPoint;
use crate::sdk::routing::error::{OsrmErrorPayload, RoutingError, NO_ROUTE_CODE};
use crate::sdk::routing::route::RawRoute;
use crate::sdk::routing::service::DirectionsProvider;
use crate::sdk::util::rate_limit::{directions_limiter, Limiter};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

pub struct OsrmProvider {
    client: Client,
    base_url: String,
    limiter: Limiter,
}

impl OsrmProvider {
    pub fn new(config: &RouterConfig) -> Result<Self, RoutingError> {
        Ok(Self {
            client: Client::builder().timeout(config.timeout).build()?,
            base_url: config.base_url.clone(),
            limiter: directions_limiter(config.requests_per_second),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Builds the driving route query, coordinates in OSRM's `lng,lat` order.
pub fn route_url(base_url: &str, from: GeoPoint, to: GeoPoint) -> String {
    let [lng1, lat1] = from.to_lng_lat();
    let [lng2, lat2] = to.to_lng_lat();
    format!(
        "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson&steps=true",
        base_url, lng1, lat1, lng2, lat2
    )
}

/// Decodes a successful response body and keeps the first-ranked route.
pub fn parse_directions(text: &str) -> Result<RawRoute, RoutingError> {
    let response: DirectionsResponse = serde_json::from_str(text)?;
    if response.code.as_deref() == Some(NO_ROUTE_CODE) {
        return Err(RoutingError::NoRouteFound);
    }
    response
        .routes
        .into_iter()
        .next()
        .map(RawRoute::from)
        .ok_or(RoutingError::NoRouteFound)
}

/// Maps a non-success response: the structured OSRM payload when the body
/// has one, the raw body otherwise.
pub fn error_from_response(status: StatusCode, text: &str) -> RoutingError {
    if let Ok(payload) = serde_json::from_str::<OsrmErrorPayload>(text) {
        return RoutingError::from_payload(payload);
    }
    log::error!(
        "API returned non-success status: {}. Unparseable Body: {}",
        status,
        text
    );
    RoutingError::RawApiError(text.to_string())
}

#[async_trait]
impl DirectionsProvider for OsrmProvider {
    async fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<RawRoute, RoutingError> {
        self.limiter.until_ready().await;

        let url = route_url(&self.base_url, from, to);
        log::debug!("[PROVIDER] Calling OSRM route for {} -> {}", from, to);

        let response = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to send GET request. URL: {}\nError: {}", url, e);
                return Err(RoutingError::RequestError(e));
            }
        };

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, &text));
        }

        parse_directions(&text).map_err(|e| {
            if let RoutingError::ParseError(ref inner) = e {
                log::error!(
                    "Failed to parse DirectionsResponse. URL: {}\nError: {}. Body: {}",
                    url,
                    inner,
                    text
                );
            }
            e
        })
    }
}
