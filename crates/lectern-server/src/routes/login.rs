use crate::app::AuthConfig;
use crate::routes::error::{ErrorData, LoginError, LoginErrorType};
use crate::user::ExtractUserId;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Extension, Json, Router};
use http::StatusCode;
use lectern_core::account;
use lectern_model::login::{LoginRequest, Token};
use sea_orm::DatabaseConnection;
use std::error::Error;

pub fn create_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/logout", post(logout))
        .nest("/login", Router::new().route("/token", post(login_token)))
        .with_state(())
}

#[utoipa::path(
    post,
    path = "/login/token",
    request_body(content = LoginRequest, description = "The identity token issued by the identity provider"),
    responses(
        (status = OK, description = "Successful login, returns Bearer token", body = Token, example = json!( Token { access_token: "abcToken12345678".into() })),
        (status = UNAUTHORIZED, description = "Authentication failed. Possible reason may be that the token is expired.", body = ErrorData<LoginErrorType>),
    ),
    tag = "util"
)]
pub(crate) async fn login_token(
    Extension(state): Extension<AuthConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Token>, LoginError> {
    let identity = state.as_ref().validator().validate(&request.token)?;
    let subject = identity.subject.clone();

    let (user, access_token) = account::login(&conn, identity).await?;
    tracing::debug!(user = %user.id, %subject, issued_at = %access_token.issued_at, "user logged in");

    Ok(Json(Token {
        access_token: access_token.access_token,
    }))
}

#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = NO_CONTENT, description = "User Logged out successfully"),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to delete access token")
    ),
    tag = "util",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn logout(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> impl IntoResponse {
    if let Err(error) = account::logout(&conn, user_id).await {
        tracing::error!(
            user = %user_id,
            error = &error as &dyn Error,
            "failed to delete access token"
        );
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    tracing::debug!(user = %user_id, "user logged out");
    StatusCode::NO_CONTENT
}
