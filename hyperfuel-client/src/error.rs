use hyperfuel_net_types::ValidationError;
use thiserror::Error as ThisError;

/// Result type of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by [`Client`](crate::Client).
#[derive(Debug, ThisError)]
pub enum Error {
    /// The query was rejected before anything was sent.
    #[error("invalid query")]
    InvalidQuery(#[from] ValidationError),
    /// Connection level failure.
    #[error("failed to reach server")]
    Transport(#[source] reqwest::Error),
    /// Connect or request timeout elapsed.
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),
    /// The server answered with something that isn't a valid response.
    #[error("unexpected response from server: {0}")]
    Protocol(String),
    /// The server answered with a non 2xx status.
    #[error("http response status code {status}: {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },
    /// The client configuration can't be used.
    #[error("invalid client config: {0}")]
    Config(String),
    /// A page failed while paginating.
    #[error("query interrupted, resume from block {next_block}")]
    Interrupted {
        /// First block that wasn't covered yet.
        next_block: u64,
        /// Failure of the page request.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Whether sending the same request again can succeed.
    ///
    /// Network failures, timeouts and 5xx responses are retryable. Everything else is a caller or
    /// protocol error.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout(_) => true,
            Self::Server { status, .. } => *status >= 500,
            Self::Interrupted { source, .. } => source.is_retryable(),
            Self::InvalidQuery(_) | Self::Protocol(_) | Self::Config(_) => false,
        }
    }

    /// Block a new query should start from to continue after this error, if known.
    pub fn resume_block(&self) -> Option<u64> {
        match self {
            Self::Interrupted { next_block, .. } => Some(*next_block),
            _ => None,
        }
    }

    /// Underlying error with pagination context removed.
    pub fn root(&self) -> &Error {
        match self {
            Self::Interrupted { source, .. } => source.root(),
            e => e,
        }
    }

    pub(crate) fn interrupted(self, next_block: u64) -> Self {
        match self {
            e @ Self::Interrupted { .. } => e,
            e => Self::Interrupted {
                next_block,
                source: Box::new(e),
            },
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e)
        } else if e.is_decode() {
            Self::Protocol(e.to_string())
        } else {
            Self::Transport(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(status: u16) -> Error {
        Error::Server {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_retry_classes() {
        assert!(server(500).is_retryable());
        assert!(server(503).is_retryable());
        assert!(!server(400).is_retryable());
        assert!(!server(404).is_retryable());
        assert!(!Error::Protocol("bad json".into()).is_retryable());
        assert!(!Error::InvalidQuery(ValidationError::NoFieldsSelected).is_retryable());
    }

    #[test]
    fn test_interrupted() {
        let err = server(502).interrupted(50);

        assert_eq!(err.resume_block(), Some(50));
        assert!(err.is_retryable());
        assert!(matches!(err.root(), Error::Server { status: 502, .. }));

        let err = err.interrupted(70);
        assert_eq!(err.resume_block(), Some(50));
        assert_eq!(server(400).resume_block(), None);
    }
}
