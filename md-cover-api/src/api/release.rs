//! Release detail lookup
//!
//! GET /api/release/<id> returns the release's media and tracks. The id is
//! the whole remainder of the path, slashes included.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::services::ReleaseDetail;
use crate::AppState;

const MISSING_RELEASE_ID: &str = "missing release id";
const INVALID_RELEASE_ID: &str = "invalid release id";

/// GET /api/release/abc-123
pub async fn get_release(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<ReleaseDetail>> {
    // Percent-decoding can fail (e.g. %FF is not UTF-8)
    let Path(id) = id.map_err(|_| ApiError::BadRequest(INVALID_RELEASE_ID))?;
    if id.is_empty() {
        return Err(ApiError::BadRequest(MISSING_RELEASE_ID));
    }

    let release = state
        .musicbrainz
        .get_release(&id)
        .await
        .map_err(ApiError::upstream("get release", "failed to get release"))?;

    Ok(Json(release))
}

/// GET /api/release/ (no id)
pub async fn missing_release_id() -> ApiError {
    ApiError::BadRequest(MISSING_RELEASE_ID)
}

/// Build release routes
///
/// The wildcard never matches an empty suffix, so the bare prefixes are
/// routed explicitly.
pub fn release_routes() -> Router<AppState> {
    Router::new()
        .route("/api/release", get(missing_release_id))
        .route("/api/release/", get(missing_release_id))
        .route("/api/release/*id", get(get_release))
}
