//! Upstream services

pub mod musicbrainz_client;
pub mod musicbrainz_models;
pub mod transport;

pub use musicbrainz_client::{MBError, MusicBrainzClient, UpstreamConfig};
pub use musicbrainz_models::{ArtistCredit, Medium, ReleaseDetail, SearchResponse, SearchResult, Track};
pub use transport::{
    ReqwestTransport, TransportError, UpstreamRequest, UpstreamResponse, UpstreamTransport,
};
