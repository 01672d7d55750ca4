use super::api;
use super::login;

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::v0::status::get_status,
        api::v0::user::get_user_info,
        api::v0::courses::list_courses,
        api::v0::courses::get_course,
        api::v0::courses::list_reviews,
        api::v0::courses::create_review,
        api::v0::courses::enroll_in_course,
        api::v0::courses::get_progress,
        api::v0::courses::set_lesson_progress,
        api::v0::enrollments::list_enrollments,
        api::v0::cart::get_cart,
        api::v0::cart::add_course,
        api::v0::cart::remove_course,
        api::v0::cart::checkout,
        api::v0::instructor::list_courses,
        api::v0::instructor::create_course,
        api::v0::instructor::get_course,
        api::v0::instructor::update_course,
        api::v0::instructor::set_published,
        api::v0::instructor::add_section,
        api::v0::instructor::add_lesson,
        api::v0::instructor::get_analytics,
        api::v0::admin::list_users,
        api::v0::admin::change_role,
        api::v0::admin::set_published,
        login::login_token,
        login::logout,
    ),
    modifiers(&SecurityAddon),
    tags()
)]
struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Api Token"))
                        .build(),
                ),
            );
        }
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // RapiDoc points at the document SwaggerUi already serves.
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
}
