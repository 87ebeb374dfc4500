//! HTTP API handlers for md-cover-api

pub mod health;
pub mod release;
pub mod search;

pub use health::health_routes;
pub use release::release_routes;
pub use search::search_routes;
