use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::{Extension, RequestPartsExt};
use axum_auth::AuthBearer;
use axum_extra::extract::Cached;
use http::StatusCode;
use http::request::Parts;
use lectern_core::account;
use lectern_model::user::User;
use sea_orm::DatabaseConnection;
use std::error::Error;
use url::form_urlencoded;
use uuid::Uuid;

pub fn extract_auth_token_from_params(parts: &Parts) -> Option<String> {
    let query = parts.uri.query()?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "access_token")
        .map(|(_, value)| value.into_owned())
}

type Rejection = (StatusCode, &'static str);

#[derive(Clone)]
struct Session {
    user: User,
}

#[derive(Clone)]
pub(crate) struct ExtractUser(pub User);

#[derive(Clone)]
pub(crate) struct ExtractUserId(pub Uuid);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Authorization header first, query parameter for clients that can't set headers
        let token = if let Ok(AuthBearer(token)) = parts.extract::<AuthBearer>().await {
            token
        } else if let Some(token) = extract_auth_token_from_params(parts) {
            token
        } else {
            return Err((StatusCode::UNAUTHORIZED, "No authentication token provided"));
        };

        let Extension::<DatabaseConnection>(conn) =
            parts
                .extract::<Extension<DatabaseConnection>>()
                .await
                .map_err(|error| {
                    tracing::error!(
                        error = &error as &dyn Error,
                        "database connection not found in app data"
                    );
                    (StatusCode::INTERNAL_SERVER_ERROR, "Database Connection not found")
                })?;

        Self::from_db(&conn, &token).await.map(|user| Self { user })
    }
}

impl Session {
    async fn from_db(conn: &DatabaseConnection, token: &str) -> Result<User, Rejection> {
        let user = match account::user_by_token(conn, token).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err((StatusCode::UNAUTHORIZED, "Authentication failed.")),
            Err(error) => {
                tracing::error!(error = &error as &dyn Error, "failed to load user of access token");
                return Err((StatusCode::INTERNAL_SERVER_ERROR, "Error loading user"));
            }
        };

        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                id: Some(user.id.as_hyphenated().to_string()),
                ..Default::default()
            }));
        });

        Ok(user)
    }
}

impl<S> OptionalFromRequestParts<S> for ExtractUser
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let Ok(session) = Cached::<Session>::from_request_parts(parts, state).await else {
            return Ok(None);
        };
        Ok(Some(Self(session.0.user)))
    }
}

impl<S> FromRequestParts<S> for ExtractUser
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session: Session = Cached::<Session>::from_request_parts(parts, state).await?.0;
        Ok(Self(session.user))
    }
}

impl<S> OptionalFromRequestParts<S> for ExtractUserId
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let Ok(session) = Cached::<Session>::from_request_parts(parts, state).await else {
            return Ok(None);
        };
        Ok(Some(Self(session.0.user.id)))
    }
}

impl<S> FromRequestParts<S> for ExtractUserId
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session: Session = Cached::<Session>::from_request_parts(parts, state).await?.0;
        Ok(Self(session.user.id))
    }
}
