//! Release search
//!
//! GET /api/search?q=<text> forwards to the MusicBrainz release search and
//! passes the results through unchanged.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::services::SearchResponse;
use crate::AppState;

const MISSING_QUERY: &str = "missing query parameter 'q'";

/// First value of `q`, or `None` if absent or empty
///
/// Repeated `q` parameters are allowed; later ones are ignored.
pub fn search_text(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
}

/// GET /api/search?q=Nevermind
pub async fn search_releases(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Query(pairs) = params.map_err(|_| ApiError::BadRequest(MISSING_QUERY))?;
    let query = search_text(&pairs).ok_or(ApiError::BadRequest(MISSING_QUERY))?;

    let results = state
        .musicbrainz
        .search_releases(query)
        .await
        .map_err(ApiError::upstream("search", "search failed"))?;

    Ok(Json(results))
}

/// Build search routes
pub fn search_routes() -> Router<AppState> {
    Router::new().route("/api/search", get(search_releases))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_text_takes_first_q() {
        let params = pairs(&[("q", "a"), ("q", "b")]);
        assert_eq!(search_text(&params), Some("a"));
    }

    #[test]
    fn test_search_text_empty_first_q_is_missing() {
        let params = pairs(&[("other", "1"), ("q", ""), ("q", "b")]);
        assert_eq!(search_text(&params), None);
    }

    #[test]
    fn test_search_text_absent() {
        assert_eq!(search_text(&pairs(&[("other", "1")])), None);
    }
}
