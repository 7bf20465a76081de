//! Routing engine error types.

/// Errors from a routing engine request.
///
/// Every variant is scoped to one line: the enricher reports it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The engine answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The engine answered 200 but reported a failure code
    #[error("routing engine returned {code}: {message}")]
    Engine { code: String, message: String },

    /// The engine reported success but returned no route candidates
    #[error("routing engine returned no routes")]
    NoRoute,

    /// Fewer than two waypoints were supplied
    #[error("at least two waypoints are required, got {0}")]
    TooFewWaypoints(usize),

    /// The response body could not be decoded
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

impl RoutingError {
    /// HTTP status for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RoutingError::Http(e) => e.status().map(|s| s.as_u16()),
            RoutingError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
