//! MusicBrainz API client
//!
//! Two lookups against MusicBrainz WS/2:
//! - release search by free text
//! - release fetch by MBID, including recordings (track listing)
//!
//! Every request carries the identifying User-Agent MusicBrainz requires and
//! is bounded by a fixed timeout. No retries, no caching.

use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use super::musicbrainz_models::{ArtistCredit, ReleaseDetail, SearchResponse};
use super::transport::{ReqwestTransport, UpstreamRequest, UpstreamTransport};

const MUSICBRAINZ_BASE_URL: &str = "https://musicbrainz.org/ws/2";
const USER_AGENT: &str = "MiniDiscCoverCreator/1.0.0 ( contact@example.com )";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// MusicBrainz client errors
#[derive(Debug, Error)]
pub enum MBError {
    /// DNS, connect or timeout failure
    #[error("musicbrainz unreachable: {0}")]
    Unreachable(String),

    /// Upstream answered with something other than 200
    #[error("musicbrainz api error: {status} {status_text}")]
    Api { status: u16, status_text: String },

    /// Body did not decode into the expected shape
    #[error("musicbrainz malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid musicbrainz base url {0:?}")]
    InvalidBaseUrl(String),
}

/// Immutable upstream settings, fixed for the life of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: MUSICBRAINZ_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl UpstreamConfig {
    /// Default settings pointed at a different service root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// MusicBrainz API client
pub struct MusicBrainzClient {
    config: UpstreamConfig,
    base_url: Url,
    transport: Arc<dyn UpstreamTransport>,
}

impl MusicBrainzClient {
    /// Create a client using the `reqwest` transport
    pub fn new(config: UpstreamConfig) -> Result<Self, MBError> {
        let transport =
            ReqwestTransport::new().map_err(|e| MBError::Unreachable(e.to_string()))?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(
        config: UpstreamConfig,
        transport: Arc<dyn UpstreamTransport>,
    ) -> Result<Self, MBError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| MBError::InvalidBaseUrl(config.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(MBError::InvalidBaseUrl(config.base_url.clone()));
        }

        Ok(Self {
            config,
            base_url,
            transport,
        })
    }

    /// Settings this client was built with
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Search releases by free text
    ///
    /// GET `{base}/release/?query=<query>&fmt=json`
    pub async fn search_releases(&self, query: &str) -> Result<SearchResponse, MBError> {
        let mut url = self.endpoint(&["release", ""])?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("fmt", "json");

        let results: SearchResponse = self.fetch_json(url).await?;

        tracing::debug!(
            query = %query,
            count = results.count,
            returned = results.releases.len(),
            "MusicBrainz release search complete"
        );

        Ok(results)
    }

    /// Fetch one release with its media and tracks
    ///
    /// GET `{base}/release/{id}?inc=recordings&fmt=json`. The id is
    /// percent-encoded as a single path segment.
    pub async fn get_release(&self, id: &str) -> Result<ReleaseDetail, MBError> {
        let mut url = self.endpoint(&["release", id])?;
        url.query_pairs_mut()
            .append_pair("inc", "recordings")
            .append_pair("fmt", "json");

        let release: ReleaseDetail = self.fetch_json(url).await?;

        tracing::debug!(
            mbid = %id,
            title = %release.title,
            artist = %ArtistCredit::names(&release.artist_credit).first().copied().unwrap_or("Unknown"),
            media = release.media.len(),
            "Retrieved release from MusicBrainz"
        );

        Ok(release)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, MBError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MBError::InvalidBaseUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, MBError> {
        tracing::debug!(url = %url, "Querying MusicBrainz API");

        let response = self
            .transport
            .get(UpstreamRequest {
                url,
                user_agent: self.config.user_agent.clone(),
                timeout: self.config.timeout,
            })
            .await
            .map_err(|e| MBError::Unreachable(e.to_string()))?;

        if response.status != 200 {
            return Err(MBError::Api {
                status: response.status,
                status_text: response.status_text,
            });
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| MBError::MalformedResponse(e.to_string()))
    }
}
