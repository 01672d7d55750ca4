use crate::client::base::{BaseClient, Config, SecureClient, build_request};
use crate::error::{Error, HttpError};
use async_trait::async_trait;
use http::Method;
use lectern_http::{BaseHttpClient, HttpClient};
use lectern_model::login::{LoginRequest, Token};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Client for a logged in user.
///
/// The identity token is exchanged for an access token on the first authenticated request.
pub struct TokenClient {
    config: Config,
    http_client: HttpClient,
    identity_token: Option<String>,
    token: Arc<RwLock<Option<String>>>,
}

impl TokenClient {
    pub fn new(config: Config, identity_token: String) -> Result<Self, Error> {
        Ok(Self {
            config,
            http_client: HttpClient::new().map_err(HttpError::from)?,
            identity_token: Some(identity_token),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Uses an access token obtained earlier instead of logging in.
    pub fn with_access_token(config: Config, access_token: String) -> Result<Self, Error> {
        Ok(Self {
            config,
            http_client: HttpClient::new().map_err(HttpError::from)?,
            identity_token: None,
            token: Arc::new(RwLock::new(Some(access_token))),
        })
    }

    async fn login(&self, identity_token: &str) -> Result<String, Error> {
        let url = self.config.base_url.token()?;
        let body = serde_json::to_vec(&LoginRequest {
            token: identity_token.to_owned(),
        })?;
        let request = build_request(Method::POST, &url, None, Some(body))?;
        tracing::debug!("exchanging identity token");
        let token: Token = self.api_send_request(request).await?.into_body();
        Ok(token.access_token)
    }

    /// Invalidates the access token on the server.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.config.base_url.logout()?;
        let token = self.fetch_token().await?;
        let request = build_request(Method::POST, &url, Some(&token), None)?;
        self.http_client.request_text(request).await.map_err(HttpError::from)?;
        *self.token.write().await = None;
        Ok(())
    }
}

impl BaseClient for TokenClient {
    fn get_http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl SecureClient for TokenClient {
    async fn fetch_token(&self) -> Result<String, Error> {
        if let Some(token) = self.token.read().await.as_ref() {
            return Ok(token.clone());
        }

        let mut token = self.token.write().await;
        // Another request may have logged in while we waited for the lock
        if let Some(token) = token.as_ref() {
            return Ok(token.clone());
        }
        let Some(identity_token) = &self.identity_token else {
            return Err(Error::LoggedOut);
        };
        let access_token = self.login(identity_token).await?;
        *token = Some(access_token.clone());
        Ok(access_token)
    }
}
