use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Received invalid json data")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error("No access token and no identity token to log in with")]
    LoggedOut,
}

impl Error {
    /// The server could not be reached at all, as opposed to answering with an error.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Http(HttpError::Lectern(error)) if error.is_unreachable())
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(HttpError::Lectern(error)) => error.status(),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Lectern(#[from] lectern_http::Error),

    #[error(transparent)]
    Http(#[from] http::Error),
}
