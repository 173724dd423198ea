//! Match source error types.

use thiserror::Error;

/// Errors returned by a [`MatchSource`](super::MatchSource)
#[derive(Debug, Error)]
pub enum SourceError {
    /// Competition id was empty
    #[error("Competition ID is required to fetch matches")]
    MissingCompetitionId,

    /// Match id was empty
    #[error("Match ID is required to update scores")]
    MissingMatchId,

    /// Configured base URL cannot carry path segments
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-success status
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not valid JSON
    #[error("Failed to decode match data: {0}")]
    Decode(String),
}

impl SourceError {
    /// Get a message suitable for end users
    ///
    /// Transport and decode details are replaced with a generic hint.
    pub fn client_message(&self) -> String {
        match self {
            SourceError::Transport(_) => {
                "Network error occurred. Please check your connection and make sure the server is running."
                    .to_string()
            }
            SourceError::Decode(_) => "Received malformed match data".to_string(),
            SourceError::Status { status, .. } => format!("Server error ({status})"),
            SourceError::InvalidUrl(_) => "The backend URL is not valid".to_string(),
            SourceError::MissingCompetitionId | SourceError::MissingMatchId => self.to_string(),
        }
    }
}

/// Result type for match source operations
pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SourceError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned status 500: boom");
    }

    #[test]
    fn test_client_message_hides_details() {
        let err = SourceError::Transport("tcp connect error: 10.0.0.3:5000".to_string());
        assert!(!err.client_message().contains("10.0.0.3"));

        let err = SourceError::Status {
            status: 503,
            body: "stack trace".to_string(),
        };
        assert_eq!(err.client_message(), "Server error (503)");

        let err = SourceError::InvalidUrl("ftp//host".to_string());
        assert!(!err.client_message().contains("ftp"));
        assert_eq!(
            SourceError::MissingMatchId.client_message(),
            "Match ID is required to update scores"
        );
    }
}
