use async_trait::async_trait;
use std::time::Duration;

use crate::core::{BaseHttpClient, HttpRequest, HttpResponse};
use crate::error::Error;
use reqwest::{Request, Response};
use serde::de::DeserializeOwned;

const TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    fn build_request(&self, request: HttpRequest) -> Result<Request, Error> {
        let mut request_builder = self
            .client
            .request(request.method().clone(), request.uri().to_string());
        for (name, value) in request.headers() {
            request_builder = request_builder.header(name.as_str(), value.as_bytes());
        }
        request_builder.body(request.into_body()).build().map_err(Into::into)
    }

    async fn execute(&self, request: HttpRequest) -> Result<Response, Error> {
        let request = self.build_request(request)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self.client.execute(request).await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Error::StatusCode(Box::new(response)))
        }
    }
}

fn response_parts(response: &Response) -> http::response::Builder {
    let mut http_response = http::response::Response::builder().status(response.status());
    if let Some(header_map) = http_response.headers_mut() {
        header_map.extend(response.headers().clone());
    }
    http_response
}

#[async_trait]
impl BaseHttpClient for ReqwestHttpClient {
    type Error = Error;

    async fn request_text(&self, request: HttpRequest) -> Result<HttpResponse<String>, Self::Error> {
        let response = self.execute(request).await?;
        let http_response = response_parts(&response);
        let text = response.text().await?;
        http_response.body(text).map_err(Into::into)
    }

    async fn request_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<HttpResponse<T>, Self::Error> {
        let response = self.execute(request).await?;
        let http_response = response_parts(&response);
        let json = response.json().await?;
        http_response.body(json).map_err(Into::into)
    }
}
