pub(crate) mod error;

use crate::permissions::Permission;
use crate::routes::api::v0::cart::error::CartError;
use crate::routes::error::{ApiErrorType, ErrorData};
use crate::user::ExtractUserId;
use axum::extract::Path;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use lectern_core::cart::{self, CartOutcome};
use lectern_model::cart::{Cart, Checkout};
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_cart))
        .route("/checkout", post(checkout))
        .route("/{course}", put(add_course).delete(remove_course))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/cart",
    responses(
        (status = OK, description = "Cart of the user with subtotal and savings", body = Cart),
    ),
    tag = "v0/cart",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_cart(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Json<Cart> {
    Json(cart::cart(&conn, user_id).await)
}

#[utoipa::path(
    put,
    path = "/api/v0/cart/{course}",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    responses(
        (status = OK, description = "Course is in the cart, returns the cart", body = Cart),
        (status = CONFLICT, description = "User is already enrolled in the course", body = ErrorData<ApiErrorType>),
        (status = NOT_FOUND, description = "Course does not exist or is not published", body = ErrorData<ApiErrorType>),
    ),
    tag = "v0/cart",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn add_course(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Cart>, CartError> {
    match cart::add_to_cart(&conn, user_id, course_id).await {
        CartOutcome::Added | CartOutcome::AlreadyInCart => {}
        CartOutcome::AlreadyEnrolled => return Err(CartError::AlreadyEnrolled),
        CartOutcome::CourseUnavailable => return Err(CartError::CourseUnavailable),
        CartOutcome::Failed => return Err(CartError::Failed),
    }
    Ok(Json(cart::cart(&conn, user_id).await))
}

#[utoipa::path(
    delete,
    path = "/api/v0/cart/{course}",
    params(
        ("course" = Uuid, Path, description = "The id of the course"),
    ),
    responses(
        (status = OK, description = "Course is not in the cart anymore, returns the cart", body = Cart),
    ),
    tag = "v0/cart",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn remove_course(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Cart>, CartError> {
    if !cart::remove_from_cart(&conn, user_id, course_id).await {
        return Err(CartError::Failed);
    }
    Ok(Json(cart::cart(&conn, user_id).await))
}

#[utoipa::path(
    post,
    path = "/api/v0/cart/checkout",
    responses(
        (status = OK, description = "Enrolled in the courses of the cart", body = Checkout),
    ),
    tag = "v0/cart",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn checkout(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Checkout>, CartError> {
    cart::checkout(&conn, user_id).await.map(Json).ok_or(CartError::Failed)
}
