//! The route session: click handling, route application and the state the
//! rendering surface draws from.

pub mod display;
pub mod driver;
pub mod selector;

pub use display::{midpoint, RouteDisplay};
pub use driver::SessionDriver;
pub use selector::{PointSelector, Selection};

use crate::sdk::geo::GeoPoint;
use crate::sdk::routing::error::{FailureKind, RoutingError};
use crate::sdk::routing::route::RawRoute;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    /// Zero or one point picked, nothing to show.
    Idle,
    /// Two points picked, request in flight.
    Computing,
    /// Two points picked and a route on display.
    Routed,
}

/// Ticket for one outbound request, tied to the selection that caused it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    generation: u64,
    pub from: GeoPoint,
    pub to: GeoPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Failed(FailureKind),
    /// The selection moved on while the request was in flight.
    Stale,
}

/// Borrowed snapshot handed to a rendering surface.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionView<'a> {
    pub state: SessionState,
    pub selection: &'a Selection,
    pub display: Option<&'a RouteDisplay>,
}

#[derive(Debug)]
pub struct RouteSession {
    selector: PointSelector,
    state: SessionState,
    display: Option<RouteDisplay>,
    // Bumped on every click; a request is current only while it matches.
    generation: u64,
}

impl Default for RouteSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteSession {
    pub fn new() -> Self {
        Self {
            selector: PointSelector::new(),
            state: SessionState::Idle,
            display: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn selection(&self) -> &Selection {
        self.selector.selection()
    }

    pub fn display(&self) -> Option<&RouteDisplay> {
        self.display.as_ref()
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            state: self.state,
            selection: self.selection(),
            display: self.display(),
        }
    }

    /// Feeds one map click. Returns the request to issue when the selection
    /// just became a complete pair.
    pub fn click(&mut self, point: GeoPoint) -> Option<RouteRequest> {
        self.generation += 1;

        match self.selector.select(point).pair() {
            Some((from, to)) => {
                log::info!("Route requested {} -> {}", from, to);
                self.state = SessionState::Computing;
                Some(RouteRequest {
                    generation: self.generation,
                    from,
                    to,
                })
            }
            None => {
                if self.display.take().is_some() {
                    log::debug!("Selection reset, previous route cleared");
                }
                self.state = SessionState::Idle;
                None
            }
        }
    }

    /// Applies a finished request. Failures and stale results never touch
    /// the display.
    pub fn apply(
        &mut self,
        request: RouteRequest,
        result: Result<RawRoute, RoutingError>,
    ) -> ApplyOutcome {
        if request.generation != self.generation || self.state != SessionState::Computing {
            log::debug!(
                "Discarding stale route result {} -> {}",
                request.from,
                request.to
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(route) => {
                let display = RouteDisplay::from_route(&route);
                log::info!(
                    "Route ready: {} km, {} steps",
                    display.total_distance_label(),
                    display.instructions.len()
                );
                self.display = Some(display);
                self.state = SessionState::Routed;
                ApplyOutcome::Applied
            }
            Err(e) => {
                log::warn!("Routing failed for {} -> {}: {}", request.from, request.to, e);
                self.state = SessionState::Idle;
                ApplyOutcome::Failed(e.kind())
            }
        }
    }
}
