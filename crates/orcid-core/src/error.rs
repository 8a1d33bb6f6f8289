//! Error type shared by the transport and the API client

/// Error from fetching or decoding an ORCID resource.
///
/// Missing fields inside a decoded document are never errors; entity
/// accessors degrade to `None` or an empty collection instead.
#[derive(Debug)]
pub enum OrcidError {
    /// The identifier does not resolve to a profile
    NotFound(String),
    /// Transport failure or non-2xx response, with optional status code
    Http {
        status: Option<u16>,
        message: String,
    },
    /// Response body is not valid JSON
    Json(String),
}

impl std::fmt::Display for OrcidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "ORCID record not found: {id}"),
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
            Self::Json(message) => write!(f, "invalid JSON: {message}"),
        }
    }
}

impl std::error::Error for OrcidError {}

impl OrcidError {
    /// Create HTTP error from reqwest error
    pub fn from_reqwest(e: &reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }

    /// Upstream answered 404 (or the error is already [`OrcidError::NotFound`])
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::Http {
                    status: Some(404),
                    ..
                }
        )
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => *status,
            Self::NotFound(_) => Some(404),
            Self::Json(_) => None,
        }
    }
}

impl From<serde_json::Error> for OrcidError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
