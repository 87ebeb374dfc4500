//! md-cover-api library
//!
//! MusicBrainz search and release lookup for the MiniDisc cover creator,
//! plus static hosting of the frontend build.

pub mod api;
pub mod error;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::MusicBrainzClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream client; immutable after construction
    pub musicbrainz: Arc<MusicBrainzClient>,
    /// Root of the static frontend build
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(musicbrainz: MusicBrainzClient, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            musicbrainz: Arc::new(musicbrainz),
            static_dir: static_dir.into(),
        }
    }
}

/// Build application router
///
/// API routes first; every other path falls through to the static tree.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .merge(api::search_routes())
        .merge(api::release_routes())
        .merge(api::health_routes())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
