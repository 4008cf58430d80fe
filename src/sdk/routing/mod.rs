pub mod cache;
pub mod error;
pub mod instructions;
pub mod provider;
pub mod route;
pub mod service;

pub use cache::CachingProvider;
pub use error::{FailureKind, RoutingError};
pub use instructions::{derive_instructions, Instruction};
pub use provider::OsrmProvider;
pub use route::{Leg, Maneuver, RawRoute, Step};
pub use service::DirectionsProvider;
