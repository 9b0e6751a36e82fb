use std::time::Duration;

use quarry_protocol::envelope::CODE_NOT_FOUND;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The request was rejected client-side before anything hit the wire.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("unexpected content type {content_type:?} for analysis stream")]
    UnexpectedContentType { content_type: String },
    /// Service-level failure reported inside a `code != 0` envelope.
    #[error("api error {code}: {msg} (request_id={request_id:?})")]
    Api {
        code: i64,
        msg: String,
        request_id: Option<String>,
    },
    /// No bytes arrived on the analysis stream within the configured idle
    /// window. Stream-fatal in practice.
    #[error("no data received on analysis stream for {0:?}")]
    IdleTimeout(Duration),
    #[error("failed reading stream: {0}")]
    Stream(#[source] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True when the service reported the target resource as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { code, .. } if *code == CODE_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_matches_envelope_code() {
        let err = Error::Api {
            code: CODE_NOT_FOUND,
            msg: "role not found".to_string(),
            request_id: None,
        };
        assert!(err.is_not_found());

        let err = Error::Api {
            code: 500,
            msg: "boom".to_string(),
            request_id: None,
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn idle_timeout_message_carries_duration() {
        let err = Error::IdleTimeout(Duration::from_secs(60));
        assert!(err.to_string().contains("60s"));
    }
}
