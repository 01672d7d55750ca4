use crate::permissions::Permission;
use crate::routes::error::{ApiErrorType, ErrorData, ServiceError};
use axum::extract::Path;
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use lectern_core::admin;
use lectern_model::course::{InstructorCourse, Published};
use lectern_model::user::{RoleUpdate, User};
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{user}/role", put(change_role))
        .route("/courses/{course}/published", put(set_published))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/users",
    responses(
        (status = OK, description = "All users of the platform", body = [User]),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn list_users(Extension(conn): Extension<DatabaseConnection>) -> Result<Json<Vec<User>>, ServiceError> {
    Ok(Json(admin::list_users(&conn).await?))
}

#[utoipa::path(
    put,
    path = "/api/v0/admin/users/{user}/role",
    params(
        ("user" = Uuid, Path, description = "The id of the user"),
    ),
    request_body = RoleUpdate,
    responses(
        (status = OK, description = "Role changed", body = User),
        (status = NOT_FOUND, description = "User does not exist", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn change_role(
    Extension(conn): Extension<DatabaseConnection>,
    Path(user_id): Path<Uuid>,
    Json(RoleUpdate { role }): Json<RoleUpdate>,
) -> Result<Json<User>, ServiceError> {
    Ok(Json(admin::change_role(&conn, user_id, role).await?))
}

#[utoipa::path(
    put,
    path = "/api/v0/admin/courses/{course}/published",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    request_body = Published,
    responses(
        (status = OK, description = "Course visibility changed", body = InstructorCourse),
        (status = NOT_FOUND, description = "Course does not exist", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/admin",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn set_published(
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
    Json(Published { published }): Json<Published>,
) -> Result<Json<InstructorCourse>, ServiceError> {
    Ok(Json(admin::set_published(&conn, course_id, published).await?))
}
