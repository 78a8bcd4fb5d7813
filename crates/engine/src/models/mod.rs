//! Value types for routes and landmarks.

pub mod route;
pub mod types;

pub use route::Route;
pub use types::*;
