//! Flight duration estimation and per-route summaries.

pub mod duration;
pub mod summary;

pub use duration::estimate_duration;
pub use summary::{LegSummary, RouteSummary};
