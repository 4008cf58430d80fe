use super::error::RoutingError;
use super::route::RawRoute;
use super::service::DirectionsProvider;
use crate::sdk::geo::GeoPoint;
use async_trait::async_trait;
use std::{collections::HashMap, fmt, sync::Mutex};

/// Ordered point pair. Unlike a city pair, `A -> B` and `B -> A` are
/// different routes, so the key is never canonicalised.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug)]
pub struct PointPairKey {
    from: [u64; 2],
    to: [u64; 2],
}

impl PointPairKey {
    pub fn new(from: GeoPoint, to: GeoPoint) -> Self {
        let bits = |p: GeoPoint| [p.latitude.to_bits(), p.longitude.to_bits()];
        Self {
            from: bits(from),
            to: bits(to),
        }
    }
}

impl fmt::Display for PointPairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let point = |b: [u64; 2]| GeoPoint::new(f64::from_bits(b[0]), f64::from_bits(b[1]));
        write!(f, "{}::{}", point(self.from), point(self.to))
    }
}

/// Memoizes successful answers of another provider. Failures are never
/// cached so a flaky request can be retried by clicking again.
pub struct CachingProvider<P> {
    inner: P,
    routes: Mutex<HashMap<PointPairKey, RawRoute>>,
}

impl<P> CachingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            routes: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &PointPairKey) -> Option<RawRoute> {
        self.routes.lock().ok()?.get(key).cloned()
    }

    fn insert(&self, key: PointPairKey, route: RawRoute) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert(key, route);
        }
    }
}

#[async_trait]
impl<P: DirectionsProvider> DirectionsProvider for CachingProvider<P> {
    async fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<RawRoute, RoutingError> {
        let key = PointPairKey::new(from, to);
        if let Some(route) = self.get(&key) {
            log::debug!("[CACHE HIT] {}", key);
            return Ok(route);
        }

        let route = self.inner.route(from, to).await?;
        self.insert(key, route.clone());
        Ok(route)
    }
}
