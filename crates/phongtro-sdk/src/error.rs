use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NotFound(String),
    InvalidInput(String),
    /// Backend rejected the request; the message is the server's own.
    Api(String),
    Internal(anyhow::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Api(msg) => write!(f, "Request failed: {}", msg),
            Error::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal(err)
    }
}

impl From<phongtro_api::Error> for Error {
    fn from(err: phongtro_api::Error) -> Self {
        match err {
            err if err.is_not_found() => Error::NotFound(err.to_string()),
            phongtro_api::Error::Api(msg) => Error::Api(msg),
            phongtro_api::Error::Status { status, message } => {
                Error::Api(format!("{} ({})", message, status))
            }
            phongtro_api::Error::Config(msg) => Error::InvalidInput(msg),
            other => Error::Internal(anyhow::Error::new(other)),
        }
    }
}
