pub mod sdk;

pub use sdk::config::RouterConfig;
pub use sdk::geo::GeoPoint;
pub use sdk::render::{JsonSurface, RenderSurface, TextSurface};
pub use sdk::routing::{derive_instructions, DirectionsProvider, OsrmProvider, RawRoute, RoutingError};
pub use sdk::session::{RouteDisplay, RouteSession, SessionDriver, SessionState};
