use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Reqwest client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Response failed with status: {}", reqwest::Response::status(.0))]
    StatusCode(Box<reqwest::Response>),

    #[error(transparent)]
    Http(#[from] http::Error),
}

impl Error {
    /// The server could not be reached or did not answer in time.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        match self {
            Self::Client(error) => error.is_connect() || error.is_timeout(),
            Self::StatusCode(_) | Self::Http(_) => false,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::StatusCode(response) => Some(response.status()),
            Self::Client(error) => error.status(),
            Self::Http(_) => None,
        }
    }
}
