use crate::auth::TokenValidator;
use crate::opt::Auth;
use crate::permissions::extract;
use crate::routes;
use axum::routing::get;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayerBuilder;
use http::{HeaderValue, Method, header};
use protect_axum::GrantsLayer;
use sea_orm::DatabaseConnection;
use sentry_tower::NewSentryLayer;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub(crate) struct InnerAuthConfig {
    validator: TokenValidator,
}

impl InnerAuthConfig {
    pub(crate) fn validator(&self) -> &TokenValidator {
        &self.validator
    }
}

#[derive(Clone)]
pub(crate) struct AuthConfig(Arc<InnerAuthConfig>);

impl AuthConfig {
    pub(crate) fn new(secret: &str, audience: &[String]) -> Self {
        Self(Arc::new(InnerAuthConfig {
            validator: TokenValidator::new(secret, audience),
        }))
    }
}

impl AsRef<InnerAuthConfig> for AuthConfig {
    fn as_ref(&self) -> &InnerAuthConfig {
        &self.0
    }
}

fn parse_origins(origins: &[String]) -> anyhow::Result<Vec<HeaderValue>> {
    Ok(origins
        .iter()
        .map(|origin| origin.parse())
        .collect::<Result<Vec<_>, _>>()?)
}

/// All routes with their extensions, without metrics.
pub(crate) fn create_router(
    auth_config: AuthConfig,
    origins: &[String],
    seaorm_pool: DatabaseConnection,
) -> anyhow::Result<Router> {
    // CORS for login routes, users don't have an access token yet
    let login_cors = CorsLayer::new()
        .allow_origin(parse_origins(origins)?)
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::COOKIE, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let api_cors = CorsLayer::new()
        .allow_origin(parse_origins(origins)?)
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION, header::ORIGIN])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .merge(routes::swagger::create_router())
        .merge(routes::login::create_router().layer(login_cors))
        .nest(
            "/api/v0",
            Router::new()
                .nest("/status", routes::api::v0::status::create_router())
                .nest("/user", routes::api::v0::user::create_router())
                .nest("/courses", routes::api::v0::courses::create_router())
                .nest("/enrollments", routes::api::v0::enrollments::create_router())
                .nest("/cart", routes::api::v0::cart::create_router())
                .nest("/instructor", routes::api::v0::instructor::create_router())
                .nest("/admin", routes::api::v0::admin::create_router())
                .layer(api_cors),
        )
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
                .layer(Extension(auth_config))
                .layer(Extension(seaorm_pool))
                .layer(GrantsLayer::with_extractor(extract)),
        )
        .with_state(());
    Ok(app)
}

pub(crate) fn create_app(auth: Auth, seaorm_pool: DatabaseConnection) -> anyhow::Result<Router> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("api")
        .with_default_metrics()
        .build_pair();

    tracing::info!(audiences = ?auth.audience, "allowing audiences");
    let auth_config = AuthConfig::new(&auth.jwt_secret, &auth.audience);

    let app = create_router(auth_config, &auth.origins, seaorm_pool)?
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer);
    Ok(app)
}

#[cfg(test)]
mod tests;
