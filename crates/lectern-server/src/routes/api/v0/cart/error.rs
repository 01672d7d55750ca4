use crate::routes::error::{ApiErrorType, ErrorData, ErrorDataProvider, GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CartError {
    #[error("User is already enrolled in the course")]
    AlreadyEnrolled,

    #[error("Course does not exist or is not published")]
    CourseUnavailable,

    #[error("Cart could not be updated")]
    Failed,
}

impl ErrorDataProvider<ApiErrorType> for CartError {
    fn error_data(self) -> Option<ErrorData<ApiErrorType>> {
        let res = match self {
            Self::AlreadyEnrolled => ErrorData::new(ApiErrorType::AlreadyEnrolled, "already enrolled in the course"),
            Self::CourseUnavailable => ErrorData::new(ApiErrorType::CourseUnavailable, "course is not available"),
            Self::Failed => return None,
        };
        Some(res)
    }
}

impl GetStatusCode for CartError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
