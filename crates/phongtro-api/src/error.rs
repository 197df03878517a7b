use std::fmt;

/// Result type for phongtro-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the transport layer
#[derive(Debug)]
pub enum Error {
    /// Connection-level failure (DNS, TCP, TLS, timeout).
    Transport(reqwest::Error),

    /// Non-2xx response; `message` is the server's message when the body
    /// carried one, otherwise the trimmed body text.
    Status { status: u16, message: String },

    /// 2xx response whose envelope reported `success == false`.
    Api(String),

    /// Response body could not be decoded.
    Decode(serde_json::Error),

    /// Envelope reported success but carried no data.
    MissingData,

    /// Client was constructed with unusable parameters.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Connection error: {}", err),
            Error::Status { status, message } => {
                write!(f, "Request failed ({}): {}", status, message)
            }
            Error::Api(msg) => write!(f, "Request rejected: {}", msg),
            Error::Decode(err) => write!(f, "Invalid response: {}", err),
            Error::MissingData => write!(f, "Invalid response: envelope carried no data"),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Status { .. } | Error::Api(_) | Error::MissingData | Error::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl Error {
    /// Whether this is a not-found response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Status { status: 404, .. })
    }
}
