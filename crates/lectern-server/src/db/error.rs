use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to migrate the course database: {0}")]
    Migration(String),

    #[error("Failed to connect to the course database")]
    Connect(#[from] diesel::result::ConnectionError),

    #[error("Unsupported database url scheme {0}, expected sqlite or postgres")]
    UnsupportedScheme(String),
}
