use thiserror::Error;

/// Result type alias for FollowMee operations
pub type Result<T> = std::result::Result<T, FollowMeeError>;

/// Errors that can occur when using the FollowMee API
#[derive(Error, Debug)]
pub enum FollowMeeError {
    /// The request could not be sent or the connection failed
    #[error("Request failed")]
    Transport {
        /// Underlying transport error, kept for diagnostics
        detail: String,
    },

    /// The response body was not valid JSON
    #[error("Bad JSON in response")]
    Decode {
        /// Underlying decode error, kept for diagnostics
        detail: String,
    },

    /// The server answered with a non-success HTTP status
    #[error("{code}: {reason}")]
    Status {
        /// HTTP status code
        code: u16,
        /// HTTP reason phrase
        reason: String,
    },

    /// The service reported an error inside an otherwise successful response
    #[error("{0}")]
    Api(String),

    /// The response body did not have the expected `Error`/`Data` shape
    #[error("unexpected response payload: {0}")]
    Payload(String),

    /// A record on the wire was missing a required field
    #[error("{record}: missing field `{field}`")]
    MissingField {
        /// Record type being constructed
        record: &'static str,
        /// Wire name of the missing field
        field: &'static str,
    },

    /// A record field carried a value that could not be parsed
    #[error("{record}: invalid value for field `{field}`: {reason}")]
    InvalidField {
        /// Record type being constructed
        record: &'static str,
        /// Wire name of the offending field
        field: &'static str,
        /// What went wrong
        reason: String,
    },
}

impl FollowMeeError {
    /// Returns true if the error happened before a response was received
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns true if the failure indicates a wire-contract mismatch
    /// rather than an application condition
    #[must_use]
    pub const fn is_contract_mismatch(&self) -> bool {
        matches!(
            self,
            Self::Payload(_) | Self::MissingField { .. } | Self::InvalidField { .. }
        )
    }

    /// Returns the HTTP status code if the server rejected the request
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
