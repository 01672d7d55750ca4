use crate::client::base::{BaseClient, Config};
use crate::error::{Error, HttpError};
use lectern_http::HttpClient;

/// Anonymous client for the public catalog endpoints.
pub struct SimpleClient {
    config: Config,
    http_client: HttpClient,
}

impl SimpleClient {
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self {
            config,
            http_client: HttpClient::new().map_err(HttpError::from)?,
        })
    }
}

impl BaseClient for SimpleClient {
    fn get_http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}
