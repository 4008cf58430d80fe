use super::provider::types;
use crate::sdk::geo::GeoPoint;
use serde::Serialize;

/// One candidate route as decoded from the provider, geometry already in
/// `GeoPoint` (lat, lng) order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawRoute {
    pub geometry: Vec<GeoPoint>,
    pub distance_m: f64,
    pub duration_s: f64,
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub distance_m: f64,
    pub summary: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub maneuver: Option<Maneuver>,
    pub distance_m: f64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Maneuver {
    /// OSRM maneuver type, e.g. "depart", "turn", "new name".
    pub kind: String,
    pub modifier: Option<String>,
    pub exit: Option<u32>,
}

impl Maneuver {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            modifier: None,
            exit: None,
        }
    }

    pub fn with_modifier(mut self, modifier: &str) -> Self {
        self.modifier = Some(modifier.to_string());
        self
    }

    pub fn with_exit(mut self, exit: u32) -> Self {
        self.exit = Some(exit);
        self
    }
}

impl Step {
    pub fn new(maneuver: Option<Maneuver>, distance_m: f64) -> Self {
        Self {
            maneuver,
            distance_m,
            name: String::new(),
        }
    }
}

impl From<types::Route> for RawRoute {
    fn from(route: types::Route) -> Self {
        Self {
            geometry: route
                .geometry
                .coordinates
                .into_iter()
                .map(GeoPoint::from_lng_lat)
                .collect(),
            distance_m: route.distance,
            duration_s: route.duration,
            legs: route.legs.into_iter().map(Leg::from).collect(),
        }
    }
}

impl From<types::Leg> for Leg {
    fn from(leg: types::Leg) -> Self {
        Self {
            distance_m: leg.distance,
            summary: leg.summary,
            steps: leg.steps.into_iter().map(Step::from).collect(),
        }
    }
}

impl From<types::Step> for Step {
    fn from(step: types::Step) -> Self {
        Self {
            maneuver: step.maneuver.map(|m| Maneuver {
                kind: m.kind,
                modifier: m.modifier,
                exit: m.exit,
            }),
            distance_m: step.distance,
            name: step.name,
        }
    }
}
