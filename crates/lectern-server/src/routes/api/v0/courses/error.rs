use crate::routes::error::{ApiErrorType, ErrorData, ErrorDataProvider, GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CoursesError {
    #[error("Course could not be found")]
    NotFound,

    #[error("User is not enrolled in the course")]
    NotEnrolled,

    #[error("Course does not exist or is not published")]
    CourseUnavailable,

    #[error("Lesson does not belong to the course")]
    UnknownLesson,

    #[error("Request could not be completed")]
    Failed,
}

impl ErrorDataProvider<ApiErrorType> for CoursesError {
    fn error_data(self) -> Option<ErrorData<ApiErrorType>> {
        let res = match self {
            Self::NotFound => ErrorData::new(ApiErrorType::NotFound, "course not found"),
            Self::NotEnrolled => ErrorData::new(ApiErrorType::NotEnrolled, "enroll in the course first"),
            Self::CourseUnavailable => ErrorData::new(ApiErrorType::CourseUnavailable, "course is not available"),
            Self::UnknownLesson => ErrorData::new(ApiErrorType::UnknownLesson, "lesson not found in course"),
            Self::Failed => return None,
        };
        Some(res)
    }
}

impl GetStatusCode for CoursesError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for CoursesError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
