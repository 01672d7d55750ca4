use crate::permissions::Permission;
use crate::user::ExtractUser;
use axum::routing::get;
use axum::{Json, Router};
use lectern_model::user::User;
use protect_axum::protect;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(get_user_info)).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/user",
    responses(
        (status = OK, description = "The logged in user", body = User),
    ),
    tag = "v0/user",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_user_info(ExtractUser(user): ExtractUser) -> Json<User> {
    Json(user)
}
