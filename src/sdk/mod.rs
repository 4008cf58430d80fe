pub mod config;
pub mod geo;
pub mod render;
pub mod routing;
pub mod session;
pub mod util;
