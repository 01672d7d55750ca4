use crate::permissions::Permission;
use crate::user::ExtractUserId;
use axum::routing::get;
use axum::{Extension, Json, Router};
use lectern_core::enrollment::enrolled_courses;
use lectern_model::enrollment::EnrolledCourse;
use protect_axum::protect;
use sea_orm::DatabaseConnection;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(list_enrollments)).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/enrollments",
    responses(
        (status = OK, description = "Courses of the user with progress, most recently accessed first", body = [EnrolledCourse]),
    ),
    tag = "v0/enrollments",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn list_enrollments(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Json<Vec<EnrolledCourse>> {
    Json(enrolled_courses(&conn, user_id).await)
}
