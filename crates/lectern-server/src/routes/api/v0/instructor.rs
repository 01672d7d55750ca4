use crate::permissions::Permission;
use crate::routes::error::{ApiErrorType, ErrorData, ServiceError};
use crate::user::ExtractUserId;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use http::StatusCode;
use lectern_core::{analytics, authoring};
use lectern_model::analytics::Analytics;
use lectern_model::course::{
    CourseDetail, CourseUpdate, InstructorCourse, Lesson, NewCourse, NewLesson, NewSection, Published, Section,
};
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/analytics", get(get_analytics))
        .nest(
            "/courses",
            Router::new()
                .route("/", get(list_courses).post(create_course))
                .nest(
                    "/{course}",
                    Router::new()
                        .route("/", get(get_course).patch(update_course))
                        .route("/published", put(set_published))
                        .route("/sections", post(add_section))
                        .route("/sections/{section}/lessons", post(add_lesson)),
                ),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/instructor/courses",
    responses(
        (status = OK, description = "Courses of the instructor, published or not", body = [InstructorCourse]),
    ),
    tag = "v0/instructor",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Instructor", ty = "Permission")]
pub(crate) async fn list_courses(
    ExtractUserId(instructor_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<InstructorCourse>>, ServiceError> {
    Ok(Json(authoring::instructor_courses(&conn, instructor_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v0/instructor/courses",
    request_body = NewCourse,
    responses(
        (status = CREATED, description = "Course created unpublished", body = InstructorCourse),
        (status = BAD_REQUEST, description = "Course fields are invalid", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/instructor",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Instructor", ty = "Permission")]
pub(crate) async fn create_course(
    ExtractUserId(instructor_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Json(course): Json<NewCourse>,
) -> Result<impl IntoResponse, ServiceError> {
    let course = authoring::create_course(&conn, instructor_id, course).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    get,
    path = "/api/v0/instructor/courses/{course}",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    responses(
        (status = OK, description = "Course with curriculum and reviews", body = CourseDetail),
        (status = FORBIDDEN, description = "Course belongs to another instructor", body = ErrorData<ApiErrorType>),
        (status = NOT_FOUND, description = "Course does not exist", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/instructor",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Instructor", ty = "Permission")]
pub(crate) async fn get_course(
    ExtractUserId(instructor_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<CourseDetail>, ServiceError> {
    Ok(Json(
        authoring::instructor_course_detail(&conn, instructor_id, course_id).await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v0/instructor/courses/{course}",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    request_body = CourseUpdate,
    responses(
        (status = OK, description = "Course updated", body = InstructorCourse),
        (status = BAD_REQUEST, description = "Course fields are invalid", body = ErrorData<ApiErrorType>),
        (status = FORBIDDEN, description = "Course belongs to another instructor", body = ErrorData<ApiErrorType>),
        (status = NOT_FOUND, description = "Course does not exist", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/instructor",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Instructor", ty = "Permission")]
pub(crate) async fn update_course(
    ExtractUserId(instructor_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
    Json(update): Json<CourseUpdate>,
) -> Result<Json<InstructorCourse>, ServiceError> {
    Ok(Json(
        authoring::update_course(&conn, instructor_id, course_id, update).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/v0/instructor/courses/{course}/published",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    request_body = Published,
    responses(
        (status = OK, description = "Course visibility changed", body = InstructorCourse),
        (status = FORBIDDEN, description = "Course belongs to another instructor", body = ErrorData<ApiErrorType>),
        (status = NOT_FOUND, description = "Course does not exist", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/instructor",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Instructor", ty = "Permission")]
pub(crate) async fn set_published(
    ExtractUserId(instructor_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
    Json(Published { published }): Json<Published>,
) -> Result<Json<InstructorCourse>, ServiceError> {
    Ok(Json(
        authoring::set_published(&conn, instructor_id, course_id, published).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v0/instructor/courses/{course}/sections",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    request_body = NewSection,
    responses(
        (status = CREATED, description = "Section appended to the curriculum", body = Section),
        (status = FORBIDDEN, description = "Course belongs to another instructor", body = ErrorData<ApiErrorType>),
        (status = NOT_FOUND, description = "Course does not exist", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/instructor",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Instructor", ty = "Permission")]
pub(crate) async fn add_section(
    ExtractUserId(instructor_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
    Json(section): Json<NewSection>,
) -> Result<impl IntoResponse, ServiceError> {
    let section = authoring::add_section(&conn, instructor_id, course_id, section).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

#[utoipa::path(
    post,
    path = "/api/v0/instructor/courses/{course}/sections/{section}/lessons",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
        ("section" = Uuid, Path, description = "The id of the section"),
    ),
    request_body = NewLesson,
    responses(
        (status = CREATED, description = "Lesson appended to the section", body = Lesson),
        (status = FORBIDDEN, description = "Course belongs to another instructor", body = ErrorData<ApiErrorType>),
        (status = NOT_FOUND, description = "Course or section does not exist", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/instructor",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Instructor", ty = "Permission")]
pub(crate) async fn add_lesson(
    ExtractUserId(instructor_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path((course_id, section_id)): Path<(Uuid, Uuid)>,
    Json(lesson): Json<NewLesson>,
) -> Result<impl IntoResponse, ServiceError> {
    let lesson = authoring::add_lesson(&conn, instructor_id, course_id, section_id, lesson).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

#[utoipa::path(
    get,
    path = "/api/v0/instructor/analytics",
    responses(
        (status = OK, description = "Enrollment, rating and completion figures per course", body = Analytics),
    ),
    tag = "v0/instructor",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Instructor", ty = "Permission")]
pub(crate) async fn get_analytics(
    ExtractUserId(instructor_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Analytics>, ServiceError> {
    Ok(Json(analytics::instructor_analytics(&conn, instructor_id).await?))
}
