pub(crate) mod error;

use crate::permissions::Permission;
use crate::routes::api::v0::courses::error::CoursesError;
use crate::routes::error::{ApiErrorType, ErrorData};
use crate::user::ExtractUserId;
use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use http::StatusCode;
use lectern_core::catalog;
use lectern_core::enrollment::{EnrollOutcome, enroll};
use lectern_core::progress::{ProgressOutcome, course_progress, update_progress};
use lectern_core::review::{ReviewOutcome, submit_review};
use lectern_db::course::CourseFilter;
use lectern_model::course::{CourseDetail, CourseQuery, CourseSummary};
use lectern_model::enrollment::{Enrollment, EnrollmentState};
use lectern_model::progress::{CourseProgress, LessonProgress};
use lectern_model::review::{NewReview, Review};
use lectern_model_tools::convert::IntoDbModel;
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_courses))
        .nest(
            "/{course}",
            Router::new()
                .route("/", get(get_course))
                .route("/reviews", get(list_reviews).post(create_review))
                .route("/enroll", post(enroll_in_course))
                .route("/progress", get(get_progress))
                .route("/lessons/{lesson}/progress", put(set_lesson_progress)),
        )
        .with_state(())
}

fn course_filter(query: CourseQuery) -> CourseFilter {
    CourseFilter {
        category: query.category,
        level: query.level.map(IntoDbModel::into_db_model),
        search: query.q,
    }
}

#[utoipa::path(
    get,
    path = "/api/v0/courses",
    params(CourseQuery),
    responses(
        (status = OK, description = "Published courses matching the filter", body = [CourseSummary]),
    ),
    tag = "v0/courses"
)]
pub(crate) async fn list_courses(
    Extension(conn): Extension<DatabaseConnection>,
    Query(query): Query<CourseQuery>,
) -> Json<Vec<CourseSummary>> {
    Json(catalog::list_published_courses(&conn, &course_filter(query)).await)
}

#[utoipa::path(
    get,
    path = "/api/v0/courses/{course}",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    responses(
        (status = OK, description = "Course with curriculum and reviews", body = CourseDetail),
        (status = NOT_FOUND, description = "Course does not exist or is not published", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/courses"
)]
pub(crate) async fn get_course(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<CourseDetail>, CoursesError> {
    catalog::course_detail(&conn, course_id)
        .await
        .map(Json)
        .ok_or(CoursesError::NotFound)
}

#[utoipa::path(
    get,
    path = "/api/v0/courses/{course}/reviews",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    responses(
        (status = OK, description = "Reviews of the course, newest first", body = [Review]),
    ),
    tag = "v0/courses"
)]
pub(crate) async fn list_reviews(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
) -> Json<Vec<Review>> {
    Json(catalog::reviews(&conn, course_id).await)
}

#[utoipa::path(
    post,
    path = "/api/v0/courses/{course}/reviews",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    request_body = NewReview,
    responses(
        (status = CREATED, description = "Review created"),
        (status = OK, description = "Existing review of the user updated"),
        (status = FORBIDDEN, description = "User is not enrolled in the course", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn create_review(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
    Json(review): Json<NewReview>,
) -> Result<StatusCode, CoursesError> {
    match submit_review(&conn, user_id, course_id, review.rating, review.comment).await {
        ReviewOutcome::Created => Ok(StatusCode::CREATED),
        ReviewOutcome::Updated => Ok(StatusCode::OK),
        ReviewOutcome::NotEnrolled => Err(CoursesError::NotEnrolled),
        ReviewOutcome::Failed => Err(CoursesError::Failed),
    }
}

#[utoipa::path(
    post,
    path = "/api/v0/courses/{course}/enroll",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    responses(
        (status = CREATED, description = "User enrolled", body = Enrollment),
        (status = OK, description = "User was already enrolled", body = Enrollment),
        (status = NOT_FOUND, description = "Course does not exist or is not published", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn enroll_in_course(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, CoursesError> {
    let (status, state) = match enroll(&conn, user_id, course_id).await {
        EnrollOutcome::Enrolled => (StatusCode::CREATED, EnrollmentState::Enrolled),
        EnrollOutcome::AlreadyEnrolled => (StatusCode::OK, EnrollmentState::AlreadyEnrolled),
        EnrollOutcome::CourseUnavailable => return Err(CoursesError::CourseUnavailable),
        EnrollOutcome::Failed => return Err(CoursesError::Failed),
    };
    Ok((status, Json(Enrollment { course_id, state })))
}

#[utoipa::path(
    get,
    path = "/api/v0/courses/{course}/progress",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    responses(
        (status = OK, description = "Progress of the user through the course", body = CourseProgress),
        (status = FORBIDDEN, description = "User is not enrolled in the course", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_progress(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<CourseProgress>, CoursesError> {
    course_progress(&conn, user_id, course_id)
        .await
        .map(Json)
        .ok_or(CoursesError::NotEnrolled)
}

#[utoipa::path(
    put,
    path = "/api/v0/courses/{course}/lessons/{lesson}/progress",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
        ("lesson" = Uuid, Path, description = "The id of the lesson"),
    ),
    request_body = LessonProgress,
    responses(
        (status = OK, description = "Lesson marked, returns the updated course progress", body = CourseProgress),
        (status = FORBIDDEN, description = "User is not enrolled in the course", body = ErrorData<ApiErrorType>),
        (status = NOT_FOUND, description = "Lesson is not part of the course", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/courses",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn set_lesson_progress(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path((course_id, lesson_id)): Path<(Uuid, Uuid)>,
    Json(progress): Json<LessonProgress>,
) -> Result<Json<CourseProgress>, CoursesError> {
    match update_progress(&conn, user_id, course_id, lesson_id, progress.completed).await {
        ProgressOutcome::Updated | ProgressOutcome::Unchanged => {}
        ProgressOutcome::NotEnrolled => return Err(CoursesError::NotEnrolled),
        ProgressOutcome::UnknownLesson => return Err(CoursesError::UnknownLesson),
        ProgressOutcome::Failed => return Err(CoursesError::Failed),
    }
    course_progress(&conn, user_id, course_id)
        .await
        .map(Json)
        .ok_or(CoursesError::Failed)
}
