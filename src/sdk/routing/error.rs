use serde::Deserialize;
use thiserror::Error;

// Error body OSRM sends with a non-success status
#[derive(Deserialize, Debug)]
pub struct OsrmErrorPayload {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// OSRM's response code when no path connects the two points.
pub const NO_ROUTE_CODE: &str = "NoRoute";

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("The provider found no route between the selected points")]
    NoRouteFound,

    // Structured error from the API
    #[error("API Error ({code}): {message}")]
    ApiError { code: String, message: String },

    // Non-success status with a body that isn't the expected JSON
    #[error("Unstructured API Error: {0}")]
    RawApiError(String),

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Route request task failed: {0}")]
    TaskFailed(String),
}

/// How the session classifies a failed route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NoRouteFound,
    RequestFailed,
}

impl RoutingError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RoutingError::NoRouteFound => FailureKind::NoRouteFound,
            _ => FailureKind::RequestFailed,
        }
    }

    /// Maps an OSRM error payload, folding the `NoRoute` code into `NoRouteFound`.
    pub fn from_payload(payload: OsrmErrorPayload) -> Self {
        if payload.code == NO_ROUTE_CODE {
            RoutingError::NoRouteFound
        } else {
            RoutingError::ApiError {
                code: payload.code,
                message: payload.message,
            }
        }
    }
}
