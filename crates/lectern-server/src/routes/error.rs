use crate::auth::AuthError;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use lectern_core::error::CoreError;
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub(crate) enum LoginError {
    #[error("Invalid identity token")]
    Auth(#[from] AuthError),

    #[error("Login failed")]
    Core(#[from] CoreError),
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum LoginErrorType {
    InvalidCredentials,
}

/// Error kinds reported by the api routes.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ApiErrorType {
    NotFound,
    NotEnrolled,
    AlreadyEnrolled,
    CourseUnavailable,
    UnknownLesson,
    InvalidInput,
    NotOwner,
}

pub(crate) trait GetStatusCode {
    fn status_code(&self) -> StatusCode;
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorData<T> {
    pub(crate) error: T,
    pub(crate) error_description: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<Map<String, Value>>,
}

impl<T> ErrorData<T> {
    pub fn new<A: Into<Cow<'static, str>>>(error: T, error_description: A) -> Self {
        Self {
            error,
            error_description: error_description.into(),
            data: None,
        }
    }
}

pub(crate) trait ErrorDataProvider<T: GetStatusCode> {
    fn error_data(self) -> Option<ErrorData<T>>;
}

impl ErrorDataProvider<LoginErrorType> for LoginError {
    fn error_data(self) -> Option<ErrorData<LoginErrorType>> {
        match self {
            Self::Auth(error) => {
                tracing::warn!(error = &error as &dyn Error, "authentication failed");
                Some(ErrorData::new(LoginErrorType::InvalidCredentials, "invalid token data"))
            }
            Self::Core(error) => {
                tracing::error!(error = &error as &dyn Error, "login failed");
                None
            }
        }
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}

impl GetStatusCode for LoginError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Core(CoreError::Database(_)) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl GetStatusCode for LoginErrorType {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
        }
    }
}

impl GetStatusCode for ApiErrorType {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::CourseUnavailable | Self::UnknownLesson => StatusCode::NOT_FOUND,
            Self::NotEnrolled | Self::NotOwner => StatusCode::FORBIDDEN,
            Self::AlreadyEnrolled => StatusCode::CONFLICT,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
        }
    }
}

/// Failure of a management operation, rendered from the [`CoreError`] it wraps.
#[derive(Error, Debug)]
#[error(transparent)]
pub(crate) struct ServiceError(#[from] CoreError);

impl ErrorDataProvider<ApiErrorType> for ServiceError {
    fn error_data(self) -> Option<ErrorData<ApiErrorType>> {
        let res = match self.0 {
            CoreError::NotFound(what) => ErrorData::new(ApiErrorType::NotFound, format!("{what} not found")),
            CoreError::Database(DbErr::RecordNotFound(message)) => ErrorData::new(ApiErrorType::NotFound, message),
            CoreError::NotOwner => ErrorData::new(ApiErrorType::NotOwner, "course belongs to another instructor"),
            CoreError::Invalid(message) => ErrorData::new(ApiErrorType::InvalidInput, message),
            error @ (CoreError::Database(_) | CoreError::Conversion(_)) => {
                tracing::error!(error = &error as &dyn Error, "request failed");
                return None;
            }
        };
        Some(res)
    }
}

impl GetStatusCode for ServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}

pub(crate) fn error_to_axum_response<E, T>(error: T) -> Response
where
    E: GetStatusCode + Serialize,
    T: GetStatusCode + ErrorDataProvider<E>,
{
    let status_code = GetStatusCode::status_code(&error);
    let error_data = error.error_data();
    match error_data {
        Some(data) => {
            let status_code = GetStatusCode::status_code(&data.error);
            let json = Json(data);
            (status_code, json).into_response()
        }
        None => status_code.into_response(),
    }
}
