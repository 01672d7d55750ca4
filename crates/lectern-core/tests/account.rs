use lectern_core::account::{Identity, login, logout, user_by_token};
use lectern_core::admin::{change_role, list_users, set_published};
use lectern_core::error::CoreError;
use lectern_entity::user::Role as RoleModel;
use lectern_model::user::Role;
use lectern_test_helpers::fixtures::{create_course, create_user};
use lectern_test_helpers::memory_db;
use test_log::test;
use uuid::Uuid;

fn identity(subject: &str) -> Identity {
    Identity {
        subject: subject.to_owned(),
        name: Some("Grace".to_owned()),
        email: None,
    }
}

#[test(tokio::test)]
async fn test_login_creates_student_once() {
    let db = &memory_db().await.unwrap();

    let (user, token) = login(db, identity("sub-1")).await.unwrap();
    assert_eq!(user.role, Role::Student);
    assert_eq!(user.name.as_deref(), Some("Grace"));

    let (again, same_token) = login(db, identity("sub-1")).await.unwrap();
    assert_eq!(again.id, user.id);
    assert_eq!(same_token.access_token, token.access_token);

    let (other, _) = login(db, identity("sub-2")).await.unwrap();
    assert_ne!(other.id, user.id);
    assert_eq!(list_users(db).await.unwrap().len(), 2);
}

#[test(tokio::test)]
async fn test_login_refreshes_profile() {
    let db = &memory_db().await.unwrap();
    login(db, identity("sub-1")).await.unwrap();

    let renamed = Identity {
        email: Some("grace@example.org".to_owned()),
        ..identity("sub-1")
    };
    let (user, _) = login(db, renamed).await.unwrap();
    assert_eq!(user.email.as_deref(), Some("grace@example.org"));
    assert_eq!(user.name.as_deref(), Some("Grace"));
}

#[test(tokio::test)]
async fn test_logout_invalidates_token() {
    let db = &memory_db().await.unwrap();
    let (user, token) = login(db, identity("sub-1")).await.unwrap();

    let found = user_by_token(db, &token.access_token).await.unwrap().unwrap();
    assert_eq!(found.id, user.id);

    assert!(logout(db, user.id).await.unwrap());
    assert!(user_by_token(db, &token.access_token).await.unwrap().is_none());
    assert!(!logout(db, user.id).await.unwrap());
}

#[test(tokio::test)]
async fn test_admin_operations() {
    let db = &memory_db().await.unwrap();
    let instructor = create_user(db, RoleModel::Instructor).await.unwrap();
    let student = create_user(db, RoleModel::Student).await.unwrap();
    let course = create_course(db, instructor.id, false, &[1]).await.unwrap().course;

    let promoted = change_role(db, student.id, Role::Instructor).await.unwrap();
    assert_eq!(promoted.role, Role::Instructor);
    assert!(matches!(
        change_role(db, Uuid::new_v4(), Role::Admin).await,
        Err(CoreError::NotFound("user"))
    ));

    let published = set_published(db, course.id, true).await.unwrap();
    assert!(published.published);
    assert!(matches!(
        set_published(db, Uuid::new_v4(), true).await,
        Err(CoreError::NotFound("course"))
    ));
}
