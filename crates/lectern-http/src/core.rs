use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// A request to the lectern api, body already serialized.
pub type HttpRequest = http::request::Request<Vec<u8>>;

pub type HttpResponse<T> = http::response::Response<T>;

/// Transport used by the api clients. Non-success status codes are errors.
#[async_trait]
pub trait BaseHttpClient: Send + Sync + Clone {
    type Error;

    /// For endpoints without a JSON body, like logout.
    async fn request_text(&self, request: HttpRequest) -> Result<HttpResponse<String>, Self::Error>;

    async fn request_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<HttpResponse<T>, Self::Error>;
}
