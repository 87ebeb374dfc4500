//! MusicBrainz release types
//!
//! The same structs decode the upstream body and encode the local response, so
//! field names are identical on both sides. Absent and `null` fields decode to
//! their zero value.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat JSON `null` like an absent field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One credited artist name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArtistCredit {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

/// Release search results with pagination metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Upstream creation timestamp, passed through verbatim
    #[serde(default, deserialize_with = "nullable")]
    pub created: String,
    #[serde(default, deserialize_with = "nullable")]
    pub count: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub offset: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub releases: Vec<SearchResult>,
}

/// One candidate release from a text search
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResult {
    /// Release MBID
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    /// Free-form label, e.g. "Official"
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    /// Loosely formatted, may be year-only
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
    /// Upstream relevance, 0-100
    #[serde(default, deserialize_with = "nullable")]
    pub score: i64,
    #[serde(rename = "artist-credit", default, deserialize_with = "nullable")]
    pub artist_credit: Vec<ArtistCredit>,
}

/// Full track layout of one release
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReleaseDetail {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub media: Vec<Medium>,
    #[serde(rename = "artist-credit", default, deserialize_with = "nullable")]
    pub artist_credit: Vec<ArtistCredit>,
}

/// One disc or side within a release
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Medium {
    /// 1-based position among the release's media
    #[serde(default, deserialize_with = "nullable")]
    pub position: i64,
    /// e.g. "CD", "MiniDisc"
    #[serde(default, deserialize_with = "nullable")]
    pub format: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tracks: Vec<Track>,
}

/// One recording within a medium
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Track {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    /// 1-based position within the medium
    #[serde(default, deserialize_with = "nullable")]
    pub position: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    /// Milliseconds; 0 when unknown
    #[serde(default, deserialize_with = "nullable")]
    pub length: i64,
}

impl ArtistCredit {
    pub fn names(credits: &[ArtistCredit]) -> Vec<&str> {
        credits.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_response_decodes_upstream_shape() {
        let body = json!({
            "created": "2024-01-01T00:00:00Z",
            "count": 1,
            "offset": 0,
            "releases": [{
                "id": "abc-123",
                "title": "Nevermind",
                "status": "Official",
                "date": "1991-09-24",
                "score": 100,
                "artist-credit": [{ "name": "Nirvana", "joinphrase": "" }],
                "country": "US"
            }]
        });

        let parsed: SearchResponse = serde_json::from_value(body).unwrap();

        assert_eq!(parsed.count, 1);
        assert_eq!(parsed.releases.len(), 1);
        let release = &parsed.releases[0];
        assert_eq!(release.id, "abc-123");
        assert_eq!(release.score, 100);
        assert_eq!(ArtistCredit::names(&release.artist_credit), vec!["Nirvana"]);
    }

    #[test]
    fn test_missing_fields_default_to_zero_values() {
        let parsed: SearchResult = serde_json::from_value(json!({
            "id": "x",
            "title": "Untitled"
        }))
        .unwrap();

        assert_eq!(parsed.status, "");
        assert_eq!(parsed.date, "");
        assert_eq!(parsed.score, 0);
        assert!(parsed.artist_credit.is_empty());
    }

    #[test]
    fn test_null_fields_default_to_zero_values() {
        let parsed: Medium = serde_json::from_value(json!({
            "position": 1,
            "format": null,
            "tracks": [{ "id": "t1", "position": 1, "title": "Intro", "length": null }]
        }))
        .unwrap();

        assert_eq!(parsed.format, "");
        assert_eq!(parsed.tracks[0].length, 0);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_value::<Track>(json!({ "position": "one" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_with_upstream_field_names() {
        let detail = ReleaseDetail {
            id: "r1".to_string(),
            title: "Album".to_string(),
            media: vec![],
            artist_credit: vec![ArtistCredit {
                name: "Someone".to_string(),
            }],
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["artist-credit"][0]["name"], "Someone");
        assert!(value["media"].as_array().unwrap().is_empty());
    }
}
