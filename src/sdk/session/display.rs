use crate::sdk::geo::GeoPoint;
use crate::sdk::routing::instructions::{derive_instructions, Instruction};
use crate::sdk::routing::route::RawRoute;
use crate::sdk::util::units::{format_km, meters_to_km};
use serde::Serialize;

/// Everything the rendering surface needs to draw one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDisplay {
    pub polyline: Vec<GeoPoint>,
    pub total_distance_km: f64,
    /// Anchor for the distance label; absent for an empty polyline.
    pub midpoint: Option<GeoPoint>,
    pub instructions: Vec<Instruction>,
}

impl RouteDisplay {
    pub fn from_route(route: &RawRoute) -> Self {
        Self {
            polyline: route.geometry.clone(),
            total_distance_km: meters_to_km(route.distance_m),
            midpoint: midpoint(&route.geometry),
            instructions: derive_instructions(route),
        }
    }

    pub fn total_distance_label(&self) -> String {
        format_km(self.total_distance_km)
    }
}

/// Vertex halfway along the array, not along the road: `polyline[N / 2]`.
pub fn midpoint(polyline: &[GeoPoint]) -> Option<GeoPoint> {
    polyline.get(polyline.len() / 2).copied()
}
