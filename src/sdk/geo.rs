use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a point from a provider coordinate, which comes as `[lng, lat]`.
    pub fn from_lng_lat(coord: [f64; 2]) -> Self {
        Self::new(coord[1], coord[0])
    }

    /// Coordinate pair as OSRM expects it in a request path.
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ParsePointError {
    #[error("expected \"lat,lng\", got \"{0}\"")]
    Format(String),

    #[error("invalid number \"{0}\"")]
    Number(String),

    #[error("coordinate out of range: lat={latitude}, lng={longitude}")]
    OutOfRange { latitude: f64, longitude: f64 },
}

impl FromStr for GeoPoint {
    type Err = ParsePointError;

    /// Parses `"lat,lng"`, the order a user reads off a map.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| ParsePointError::Format(s.to_string()))?;

        let parse = |part: &str| -> Result<f64, ParsePointError> {
            let part = part.trim();
            part.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParsePointError::Number(part.to_string()))
        };
        let (latitude, longitude) = (parse(lat)?, parse(lng)?);

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ParsePointError::OutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(Self::new(latitude, longitude))
    }
}
