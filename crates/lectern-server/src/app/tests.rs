use super::*;
use crate::auth::tests::{AUDIENCE, SECRET, identity_token};
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode};
use lectern_config::catalog::Catalog;
use lectern_entity::user::Role;
use lectern_model::user::Role as UserRole;
use lectern_test_helpers::fixtures::{TestCourse, create_course, create_user};
use lectern_test_helpers::memory_db;
use serde_json::{Value, json};
use test_log::test;
use tower::ServiceExt;
use uuid::Uuid;

async fn test_app() -> (Router, DatabaseConnection) {
    let db = memory_db().await.unwrap();
    let auth_config = AuthConfig::new(SECRET, &[AUDIENCE.to_owned()]);
    let app = create_router(auth_config, &[], db.clone()).unwrap();
    (app, db)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn login(app: &Router, subject: &str) -> String {
    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/login/token",
            None,
            Some(json!({ "token": identity_token(subject, Some("Test User")) })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_owned()
}

async fn published_course(db: &DatabaseConnection) -> TestCourse {
    let instructor = create_user(db, Role::Instructor).await.unwrap();
    create_course(db, instructor.id, true, &[2, 1]).await.unwrap()
}

#[test(tokio::test)]
async fn test_status() {
    let (app, _db) = test_app().await;
    let (status, _) = send(&app, request(Method::GET, "/api/v0/status", None, None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[test(tokio::test)]
async fn test_list_seeded_catalog() {
    let (app, db) = test_app().await;
    crate::data::catalog::seed(&db, &Catalog::bundled().unwrap()).await.unwrap();

    let (status, body) = send(&app, request(Method::GET, "/api/v0/courses", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    let courses = body.as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert!(courses.iter().all(|course| course["published"] == json!(true)));

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/v0/courses?level=BEGINNER&q=rust", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], json!("Rust from Scratch"));

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/v0/courses/5a9d2c41-7b3e-4f10-8c6d-2e1f0a9b8c01", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sections"].as_array().unwrap().len(), 2);
}

#[test(tokio::test)]
async fn test_unknown_course() {
    let (app, _db) = test_app().await;
    let uri = format!("/api/v0/courses/{}", Uuid::new_v4());
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("not_found"));
}

#[test(tokio::test)]
async fn test_login_and_user_info() {
    let (app, _db) = test_app().await;
    let token = login(&app, "student-1").await;
    assert_eq!(login(&app, "student-1").await, token);

    let (status, body) = send(&app, request(Method::GET, "/api/v0/user", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], json!("STUDENT"));
    assert_eq!(body["name"], json!("Test User"));

    let uri = format!("/api/v0/user?access_token={token}");
    let (status, _) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[test(tokio::test)]
async fn test_login_with_invalid_token() {
    let (app, _db) = test_app().await;
    let (status, body) = send(
        &app,
        request(Method::POST, "/login/token", None, Some(json!({ "token": "garbage" }))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("invalid_credentials"));
}

#[test(tokio::test)]
async fn test_logout() {
    let (app, _db) = test_app().await;
    let token = login(&app, "student-1").await;

    let (status, _) = send(&app, request(Method::POST, "/logout", Some(&token), None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, request(Method::GET, "/api/v0/user", Some(&token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, request(Method::POST, "/logout", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[test(tokio::test)]
async fn test_protected_without_token() {
    let (app, _db) = test_app().await;
    let (status, _) = send(&app, request(Method::GET, "/api/v0/enrollments", None, None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[test(tokio::test)]
async fn test_enroll() {
    let (app, db) = test_app().await;
    let course = published_course(&db).await;
    let token = login(&app, "student-1").await;
    let uri = format!("/api/v0/courses/{}/enroll", course.course.id);

    let (status, body) = send(&app, request(Method::POST, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["state"], json!("enrolled"));

    let (status, body) = send(&app, request(Method::POST, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], json!("already_enrolled"));

    let (status, body) = send(&app, request(Method::GET, "/api/v0/enrollments", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["progress"]["completed_lessons"], json!(0));
}

#[test(tokio::test)]
async fn test_enroll_unpublished() {
    let (app, db) = test_app().await;
    let instructor = create_user(&db, Role::Instructor).await.unwrap();
    let course = create_course(&db, instructor.id, false, &[1]).await.unwrap();
    let token = login(&app, "student-1").await;

    let uri = format!("/api/v0/courses/{}/enroll", course.course.id);
    let (status, body) = send(&app, request(Method::POST, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("course_unavailable"));
}

#[test(tokio::test)]
async fn test_cart_and_checkout() {
    let (app, db) = test_app().await;
    let course = published_course(&db).await;
    let token = login(&app, "student-1").await;
    let uri = format!("/api/v0/cart/{}", course.course.id);

    let (status, body) = send(&app, request(Method::PUT, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["subtotal"], json!(4999));
    assert_eq!(body["savings"], json!(5000));

    let (status, body) = send(&app, request(Method::POST, "/api/v0/cart/checkout", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enrolled"], json!([course.course.id]));
    assert_eq!(body["failed"], json!([]));

    let (_, body) = send(&app, request(Method::GET, "/api/v0/cart", Some(&token), None)).await;
    assert!(body["items"].as_array().unwrap().is_empty());

    let (status, body) = send(&app, request(Method::PUT, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], json!("already_enrolled"));
}

#[test(tokio::test)]
async fn test_remove_from_cart() {
    let (app, db) = test_app().await;
    let course = published_course(&db).await;
    let token = login(&app, "student-1").await;
    let uri = format!("/api/v0/cart/{}", course.course.id);

    send(&app, request(Method::PUT, &uri, Some(&token), None)).await;
    let (status, body) = send(&app, request(Method::DELETE, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["subtotal"], json!(0));
}

#[test(tokio::test)]
async fn test_review_requires_enrollment() {
    let (app, db) = test_app().await;
    let course = published_course(&db).await;
    let token = login(&app, "student-1").await;
    let uri = format!("/api/v0/courses/{}/reviews", course.course.id);
    let review = json!({ "rating": 4, "comment": "solid" });

    let (status, body) = send(&app, request(Method::POST, &uri, Some(&token), Some(review.clone()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], json!("not_enrolled"));

    let enroll = format!("/api/v0/courses/{}/enroll", course.course.id);
    send(&app, request(Method::POST, &enroll, Some(&token), None)).await;

    let (status, _) = send(&app, request(Method::POST, &uri, Some(&token), Some(review))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        request(Method::POST, &uri, Some(&token), Some(json!({ "rating": 2 }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["rating"], json!(2));
}

#[test(tokio::test)]
async fn test_progress() {
    let (app, db) = test_app().await;
    let course = published_course(&db).await;
    let token = login(&app, "student-1").await;
    let course_id = course.course.id;

    let progress_uri = format!("/api/v0/courses/{course_id}/progress");
    let (status, _) = send(&app, request(Method::GET, &progress_uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let enroll = format!("/api/v0/courses/{course_id}/enroll");
    send(&app, request(Method::POST, &enroll, Some(&token), None)).await;

    let first = course.lessons[0].id;
    let uri = format!("/api/v0/courses/{course_id}/lessons/{first}/progress");
    let (status, body) = send(
        &app,
        request(Method::PUT, &uri, Some(&token), Some(json!({ "completed": true }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed_lessons"], json!(1));
    assert_eq!(body["total_lessons"], json!(3));
    assert_eq!(body["next_lesson"]["lesson_id"], json!(course.lessons[1].id));

    let unknown = format!("/api/v0/courses/{course_id}/lessons/{}/progress", Uuid::new_v4());
    let (status, body) = send(
        &app,
        request(Method::PUT, &unknown, Some(&token), Some(json!({ "completed": true }))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("unknown_lesson"));

    let (status, body) = send(&app, request(Method::GET, &progress_uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed_lessons"], json!(1));
}

#[test(tokio::test)]
async fn test_instructor_routes_forbidden_for_students() {
    let (app, _db) = test_app().await;
    let token = login(&app, "student-1").await;
    let (status, _) = send(&app, request(Method::GET, "/api/v0/instructor/courses", Some(&token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, request(Method::GET, "/api/v0/admin/users", Some(&token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

async fn login_with_role(app: &Router, db: &DatabaseConnection, subject: &str, role: UserRole) -> (Uuid, String) {
    let token = login(app, subject).await;
    let (_, body) = send(app, request(Method::GET, "/api/v0/user", Some(&token), None)).await;
    let user_id: Uuid = serde_json::from_value(body["id"].clone()).unwrap();
    lectern_core::admin::change_role(db, user_id, role).await.unwrap();
    (user_id, token)
}

#[test(tokio::test)]
async fn test_instructor_authoring() {
    let (app, db) = test_app().await;
    let (_, token) = login_with_role(&app, &db, "instructor-1", UserRole::Instructor).await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/v0/instructor/courses",
            Some(&token),
            Some(json!({
                "title": "Testing in Rust",
                "price": 1999,
                "category": "Programming",
                "level": "INTERMEDIATE",
                "duration_minutes": 60,
                "description": "Unit and integration tests",
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["published"], json!(false));
    let course_id = body["id"].as_str().unwrap().to_owned();

    let uri = format!("/api/v0/instructor/courses/{course_id}/sections");
    let (status, section) = send(
        &app,
        request(Method::POST, &uri, Some(&token), Some(json!({ "title": "Basics" }))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(section["position"], json!(0));

    let uri = format!(
        "/api/v0/instructor/courses/{course_id}/sections/{}/lessons",
        section["id"].as_str().unwrap()
    );
    let (status, lesson) = send(
        &app,
        request(
            Method::POST,
            &uri,
            Some(&token),
            Some(json!({ "title": "First test", "duration_minutes": 12 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(lesson["position"], json!(0));

    let uri = format!("/api/v0/instructor/courses/{course_id}/published");
    let (status, body) = send(
        &app,
        request(Method::PUT, &uri, Some(&token), Some(json!({ "published": true }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["published"], json!(true));

    let (status, body) = send(&app, request(Method::GET, "/api/v0/courses", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, request(Method::GET, "/api/v0/instructor/analytics", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["courses"].as_array().unwrap().len(), 1);
}

#[test(tokio::test)]
async fn test_instructor_cannot_edit_foreign_course() {
    let (app, db) = test_app().await;
    let course = published_course(&db).await;
    let (_, token) = login_with_role(&app, &db, "instructor-2", UserRole::Instructor).await;

    let uri = format!("/api/v0/instructor/courses/{}", course.course.id);
    let (status, body) = send(
        &app,
        request(Method::PATCH, &uri, Some(&token), Some(json!({ "title": "Taken over" }))),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], json!("not_owner"));
}

#[test(tokio::test)]
async fn test_admin_change_role() {
    let (app, db) = test_app().await;
    let (_, admin_token) = login_with_role(&app, &db, "admin-1", UserRole::Admin).await;
    let student = create_user(&db, Role::Student).await.unwrap();

    let uri = format!("/api/v0/admin/users/{}/role", student.id);
    let (status, body) = send(
        &app,
        request(Method::PUT, &uri, Some(&admin_token), Some(json!({ "role": "INSTRUCTOR" }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], json!("INSTRUCTOR"));

    let (status, body) = send(&app, request(Method::GET, "/api/v0/admin/users", Some(&admin_token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let uri = format!("/api/v0/admin/users/{}/role", Uuid::new_v4());
    let (status, _) = send(
        &app,
        request(Method::PUT, &uri, Some(&admin_token), Some(json!({ "role": "ADMIN" }))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
