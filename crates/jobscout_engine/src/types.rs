use serde::Deserialize;
use thiserror::Error;

/// Tag tying requests and their completion events to one (query, page)
/// round. Minted by the state machine; the engine passes it through.
pub type Generation = u64;

/// One job listing as it appears on the wire. Fields other than `id` and
/// `title` are frequently null or absent upstream, so everything else is
/// optional and defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub company_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub how_to_apply: Option<String>,
}

/// Completion events for one generation. The primary page and the probe
/// resolve independently and may arrive in either order; a cancelled
/// request produces no event at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PageLoaded {
        generation: Generation,
        jobs: Vec<JobRecord>,
    },
    ProbeResolved {
        generation: Generation,
        has_next: bool,
    },
    PageFailed {
        generation: Generation,
        error: FetchError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("malformed response body")]
    MalformedBody,
    #[error("network error")]
    Network,
}
