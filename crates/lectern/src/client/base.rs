use crate::error::{Error, HttpError, InternalError};
use async_trait::async_trait;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method, Uri};
use lectern_http::{BaseHttpClient, HttpClient, HttpRequest, HttpResponse};
use lectern_model::cart::{Cart, Checkout};
use lectern_model::course::{CourseDetail, CourseQuery, CourseSummary};
use lectern_model::enrollment::{EnrolledCourse, Enrollment};
use lectern_model::progress::{CourseProgress, LessonProgress};
use lectern_model::review::{NewReview, Review};
use lectern_model::status::Status;
use lectern_model::user::User;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

#[derive(Debug)]
pub struct Config {
    pub base_url: ApiUrl,
}

impl Config {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: ApiUrl { url: base_url },
        }
    }
}

#[derive(Debug)]
pub struct ApiUrl {
    pub url: Url,
}

impl From<ApiUrl> for Url {
    fn from(api_url: ApiUrl) -> Self {
        api_url.url
    }
}

impl ApiUrl {
    pub fn for_api(&self, api_path: &str) -> Result<Url, InternalError> {
        self.url.join("api/v0/")?.join(api_path).map_err(Into::into)
    }

    pub fn token(&self) -> Result<Url, InternalError> {
        self.url.join("login/token").map_err(Into::into)
    }

    pub fn logout(&self) -> Result<Url, InternalError> {
        self.url.join("logout").map_err(Into::into)
    }
}

fn to_uri(url: &Url) -> Result<Uri, InternalError> {
    url.as_str().parse().map_err(Into::into)
}

pub(crate) fn build_request(
    method: Method,
    url: &Url,
    token: Option<&str>,
    body: Option<Vec<u8>>,
) -> Result<HttpRequest, Error> {
    let mut request_builder = http::request::Request::builder().method(method).uri(to_uri(url)?);
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(InternalError::from)?;
        value.set_sensitive(true);
        request_builder = request_builder.header(AUTHORIZATION, value);
    }
    if body.is_some() {
        request_builder = request_builder.header(CONTENT_TYPE, "application/json");
    }
    Ok(request_builder
        .body(body.unwrap_or_default())
        .map_err(HttpError::from)?)
}

fn catalog_url(api_url: &ApiUrl, query: &CourseQuery) -> Result<Url, InternalError> {
    let mut url = api_url.for_api("courses")?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(category) = &query.category {
            pairs.append_pair("category", category);
        }
        if let Some(level) = query.level {
            pairs.append_pair("level", level.as_ref());
        }
        if let Some(q) = &query.q {
            pairs.append_pair("q", q);
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(url)
}

#[async_trait]
pub trait BaseClient: Sync {
    fn get_http_client(&self) -> &HttpClient;
    fn get_config(&self) -> &Config;

    async fn api_send_request<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<HttpResponse<T>, HttpError> {
        tracing::debug!(method = ?request.method(), uri = ?request.uri(), "Sending API request");
        self.get_http_client()
            .request_json(request)
            .await
            .map_err(HttpError::from)
    }

    async fn api_request<T: DeserializeOwned>(&self, method: Method, url: &Url) -> Result<T, Error> {
        let request = build_request(method, url, None, None)?;
        let res = self.api_send_request(request).await?;
        Ok(res.into_body())
    }
}

#[async_trait]
pub trait PublicClient: BaseClient {
    async fn get_status(&self) -> Result<Status, Error> {
        let url = self.get_config().base_url.for_api("status")?;
        self.api_request(Method::GET, &url).await
    }

    async fn courses(&self, query: &CourseQuery) -> Result<Vec<CourseSummary>, Error> {
        let url = catalog_url(&self.get_config().base_url, query)?;
        self.api_request(Method::GET, &url).await
    }

    async fn course(&self, course_id: Uuid) -> Result<CourseDetail, Error> {
        let url = self.get_config().base_url.for_api(&format!("courses/{course_id}"))?;
        self.api_request(Method::GET, &url).await
    }

    async fn reviews(&self, course_id: Uuid) -> Result<Vec<Review>, Error> {
        let url = self.get_config().base_url.for_api(&format!("courses/{course_id}/reviews"))?;
        self.api_request(Method::GET, &url).await
    }
}

impl<T> PublicClient for T where T: BaseClient {}

/// Endpoints that act on behalf of the logged in user.
#[async_trait]
pub trait SecureClient: PublicClient {
    async fn fetch_token(&self) -> Result<String, Error>;

    async fn authenticated_request<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, Error> {
        let url = self.get_config().base_url.for_api(path)?;
        let token = self.fetch_token().await?;
        let body = body.map(serde_json::to_vec).transpose()?;
        let request = build_request(method, &url, Some(&token), body)?;
        Ok(self.api_send_request(request).await?.into_body())
    }

    /// Sends a request whose response body is not needed.
    async fn authenticated_command<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), Error> {
        let url = self.get_config().base_url.for_api(path)?;
        let token = self.fetch_token().await?;
        let body = body.map(serde_json::to_vec).transpose()?;
        let request = build_request(method, &url, Some(&token), body)?;
        self.get_http_client()
            .request_text(request)
            .await
            .map_err(HttpError::from)?;
        Ok(())
    }

    async fn current_user(&self) -> Result<User, Error> {
        self.authenticated_request(Method::GET, "user", None::<&()>).await
    }

    async fn enroll(&self, course_id: Uuid) -> Result<Enrollment, Error> {
        self.authenticated_request(Method::POST, &format!("courses/{course_id}/enroll"), None::<&()>)
            .await
    }

    async fn enrollments(&self) -> Result<Vec<EnrolledCourse>, Error> {
        self.authenticated_request(Method::GET, "enrollments", None::<&()>).await
    }

    async fn course_progress(&self, course_id: Uuid) -> Result<CourseProgress, Error> {
        self.authenticated_request(Method::GET, &format!("courses/{course_id}/progress"), None::<&()>)
            .await
    }

    async fn set_lesson_completed(&self, course_id: Uuid, lesson_id: Uuid, completed: bool) -> Result<CourseProgress, Error> {
        self.authenticated_request(
            Method::PUT,
            &format!("courses/{course_id}/lessons/{lesson_id}/progress"),
            Some(&LessonProgress { completed }),
        )
        .await
    }

    async fn cart(&self) -> Result<Cart, Error> {
        self.authenticated_request(Method::GET, "cart", None::<&()>).await
    }

    async fn add_to_cart(&self, course_id: Uuid) -> Result<Cart, Error> {
        self.authenticated_request(Method::PUT, &format!("cart/{course_id}"), None::<&()>)
            .await
    }

    async fn remove_from_cart(&self, course_id: Uuid) -> Result<Cart, Error> {
        self.authenticated_request(Method::DELETE, &format!("cart/{course_id}"), None::<&()>)
            .await
    }

    async fn checkout(&self) -> Result<Checkout, Error> {
        self.authenticated_request(Method::POST, "cart/checkout", None::<&()>).await
    }

    async fn submit_review(&self, course_id: Uuid, review: &NewReview) -> Result<(), Error> {
        self.authenticated_command(Method::POST, &format!("courses/{course_id}/reviews"), Some(review))
            .await
    }
}
