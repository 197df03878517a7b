use std::fmt;

/// Error surface of the injected backend collaborators.
///
/// Operation implementations (SDK handles, test mocks) map their transport
/// errors into this enum so controllers stay transport-agnostic.
#[derive(Debug)]
pub enum OpError {
    /// Entity does not exist (or is not visible to the caller).
    NotFound(String),
    /// Backend rejected the operation (envelope `success == false` or a
    /// 4xx with a server-provided message).
    Api(String),
    /// Connection-level failure.
    Transport(String),
    /// Response body could not be decoded.
    Decode(String),
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::NotFound(msg) => write!(f, "Not found: {}", msg),
            OpError::Api(msg) => write!(f, "Request failed: {}", msg),
            OpError::Transport(msg) => write!(f, "Connection error: {}", msg),
            OpError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for OpError {}
