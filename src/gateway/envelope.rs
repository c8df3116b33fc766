//! Wire types for the movie database response.

use serde::{Deserialize, Serialize};

/// One search hit as returned by the upstream database.
///
/// Field names on the wire are the upstream's (`Title`, `imdbID`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    /// Poster URL, or the literal "N/A".
    #[serde(rename = "Poster")]
    pub poster: String,
}

impl MovieSummary {
    pub fn has_poster(&self) -> bool {
        !self.poster.is_empty() && self.poster != "N/A"
    }
}

/// Upstream response envelope, discriminated by the `Response` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvelope", into = "RawEnvelope")]
pub enum RemoteEnvelope {
    /// `{"Search": [...], "Response": "True"}`
    Found {
        search: Vec<MovieSummary>,
        total_results: Option<String>,
    },
    /// `{"Response": "False", "Error": "..."}`
    NotFound { error: String },
}

impl RemoteEnvelope {
    pub fn found(search: Vec<MovieSummary>) -> Self {
        let total = search.len().to_string();
        RemoteEnvelope::Found {
            search,
            total_results: Some(total),
        }
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        RemoteEnvelope::NotFound {
            error: error.into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawEnvelope {
    #[serde(rename = "Search", default, skip_serializing_if = "Option::is_none")]
    search: Option<Vec<MovieSummary>>,
    #[serde(rename = "totalResults", default, skip_serializing_if = "Option::is_none")]
    total_results: Option<String>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl TryFrom<RawEnvelope> for RemoteEnvelope {
    type Error = String;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        match raw.response.as_str() {
            "True" => Ok(RemoteEnvelope::Found {
                search: raw.search.unwrap_or_default(),
                total_results: raw.total_results,
            }),
            "False" => Ok(RemoteEnvelope::NotFound {
                error: raw.error.unwrap_or_else(|| "Unknown error".to_string()),
            }),
            other => Err(format!("unexpected Response value {:?}", other)),
        }
    }
}

impl From<RemoteEnvelope> for RawEnvelope {
    fn from(envelope: RemoteEnvelope) -> Self {
        match envelope {
            RemoteEnvelope::Found {
                search,
                total_results,
            } => RawEnvelope {
                search: Some(search),
                total_results,
                response: "True".to_string(),
                error: None,
            },
            RemoteEnvelope::NotFound { error } => RawEnvelope {
                search: None,
                total_results: None,
                response: "False".to_string(),
                error: Some(error),
            },
        }
    }
}
