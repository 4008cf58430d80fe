use serde::Deserialize;

// --- Data Structures for parsing OSRM route responses ---

#[derive(Deserialize, Debug)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Deserialize, Debug)]
pub struct Route {
    pub geometry: Geometry,
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// GeoJSON line geometry, coordinates in `[lng, lat]` order.
#[derive(Deserialize, Debug)]
pub struct Geometry {
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize, Debug)]
pub struct Leg {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Deserialize, Debug)]
pub struct Step {
    #[serde(default)]
    pub maneuver: Option<Maneuver>,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct Maneuver {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub exit: Option<u32>,
}
