use super::{ApplyOutcome, RouteRequest, RouteSession};
use crate::sdk::geo::GeoPoint;
use crate::sdk::render::RenderSurface;
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::route::RawRoute;
use crate::sdk::routing::service::DirectionsProvider;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{Id, JoinError, JoinSet};

type Finished = (RouteRequest, Result<RawRoute, RoutingError>);

#[derive(Default)]
struct InFlight {
    tasks: JoinSet<Finished>,
    // Lets a task that died still be answered with its own request.
    requests: HashMap<Id, RouteRequest>,
}

/// Event loop joining map clicks with in-flight route requests.
///
/// Requests are never cancelled. The session drops any result whose
/// selection was superseded before it arrived.
pub struct SessionDriver<S> {
    session: RouteSession,
    provider: Arc<dyn DirectionsProvider>,
    surface: S,
}

impl<S: RenderSurface> SessionDriver<S> {
    pub fn new(provider: Arc<dyn DirectionsProvider>, surface: S) -> Self {
        Self {
            session: RouteSession::new(),
            provider,
            surface,
        }
    }

    pub fn session(&self) -> &RouteSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Runs until the click stream closes, then waits for outstanding
    /// requests so a final route still gets shown.
    pub async fn run(&mut self, mut clicks: mpsc::Receiver<GeoPoint>) {
        let mut in_flight = InFlight::default();

        loop {
            tokio::select! {
                click = clicks.recv() => match click {
                    Some(point) => self.on_click(point, &mut in_flight),
                    None => break,
                },
                Some(joined) = in_flight.tasks.join_next_with_id() => {
                    self.on_finished(joined, &mut in_flight.requests)
                }
            }
        }

        log::debug!(
            "Click stream closed, {} request(s) outstanding",
            in_flight.tasks.len()
        );
        while let Some(joined) = in_flight.tasks.join_next_with_id().await {
            self.on_finished(joined, &mut in_flight.requests);
        }
    }

    fn on_click(&mut self, point: GeoPoint, in_flight: &mut InFlight) {
        log::debug!("Click at {}", point);
        if let Some(request) = self.session.click(point) {
            let provider = Arc::clone(&self.provider);
            let handle = in_flight.tasks.spawn(async move {
                let result = provider.route(request.from, request.to).await;
                (request, result)
            });
            in_flight.requests.insert(handle.id(), request);
        }
        self.surface.render(&self.session.view());
    }

    fn on_finished(
        &mut self,
        joined: Result<(Id, Finished), JoinError>,
        requests: &mut HashMap<Id, RouteRequest>,
    ) {
        let (request, result) = match joined {
            Ok((id, finished)) => {
                requests.remove(&id);
                finished
            }
            Err(e) => {
                log::error!("Route request task died: {}", e);
                let Some(request) = requests.remove(&e.id()) else {
                    return;
                };
                (request, Err(RoutingError::TaskFailed(e.to_string())))
            }
        };

        if self.session.apply(request, result) == ApplyOutcome::Applied {
            self.surface.render(&self.session.view());
        }
    }
}
