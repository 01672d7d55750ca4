use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use lectern_core::status::get_sea_orm_db_status;
use lectern_model::status::ComponentStatus;
use sea_orm::DatabaseConnection;
use serde_json::json;
use tracing::instrument;
use utoipa::ToSchema;

pub fn create_router<S>() -> Router<S> {
    Router::new().route("/", get(get_status)).with_state(())
}

#[derive(Debug, Clone, ToSchema)]
struct Status {
    database: ComponentStatus,
}

impl Status {
    pub(crate) fn status_code(&self) -> StatusCode {
        if self.database.is_ok() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<Status> for lectern_model::status::Status {
    fn from(val: Status) -> Self {
        lectern_model::status::Status {
            database: val.database.into_message(),
        }
    }
}

impl IntoResponse for Status {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let status: lectern_model::status::Status = self.into();
        (status_code, Json(status)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/api/v0/status",
    responses(
        (status = OK, description = "Server is ok", body = Status, example = json!( lectern_model::status::Status { database: json!("ok") } )),
        (status = INTERNAL_SERVER_ERROR, description = "Database is not reachable", body = Status),
    ),
    tag = "util"
)]
#[instrument(skip_all)]
pub(crate) async fn get_status(Extension(conn): Extension<DatabaseConnection>) -> impl IntoResponse {
    Status {
        database: get_sea_orm_db_status(&conn, None).await,
    }
}
