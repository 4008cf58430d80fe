pub mod remote;
pub mod types;

pub use remote::{error_from_response, parse_directions, route_url, OsrmProvider};
