pub mod log;
pub mod rate_limit;
pub mod units;
