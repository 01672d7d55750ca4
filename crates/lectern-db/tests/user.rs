mod common;

use crate::common::test_db;
use crate::common::user::create_test_user;
use lectern_db::{access_tokens, identity_mapping, user};
use lectern_entity::user::Role;
use test_log::test;

#[test(tokio::test)]
async fn test_access_token_is_reused() {
    let db = &test_db().await;
    let user = create_test_user(db).await;

    let first = access_tokens::Mutation::get_or_create(db, user.id).await.unwrap();
    let second = access_tokens::Mutation::get_or_create(db, user.id).await.unwrap();
    assert_eq!(first.access_token, second.access_token);

    let found = user::Query::find_by_token(db, &first.access_token).await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
}

#[test(tokio::test)]
async fn test_delete_access_token() {
    let db = &test_db().await;
    let user = create_test_user(db).await;

    let token = access_tokens::Mutation::get_or_create(db, user.id).await.unwrap();
    assert_eq!(access_tokens::Mutation::delete(db, user.id).await.unwrap(), 1);
    assert!(user::Query::find_by_token(db, &token.access_token).await.unwrap().is_none());
    assert_eq!(access_tokens::Mutation::delete(db, user.id).await.unwrap(), 0);
}

#[test(tokio::test)]
async fn test_identity_mapping_keeps_first_user() {
    let db = &test_db().await;
    let first = create_test_user(db).await;
    let second = create_test_user(db).await;

    let mapping = identity_mapping::Mutation::get_or_create(db, first.id, "sub-1".to_owned())
        .await
        .unwrap();
    assert_eq!(mapping.user_id, first.id);

    let mapping = identity_mapping::Mutation::get_or_create(db, second.id, "sub-1".to_owned())
        .await
        .unwrap();
    assert_eq!(mapping.user_id, first.id);

    let found = user::Query::find_by_subject(db, "sub-1").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
    assert!(user::Query::find_by_subject(db, "sub-2").await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_create_and_update_role() {
    let db = &test_db().await;

    let user = user::Mutation::create_user(db, Some("Ada".to_owned()), None, Role::Student)
        .await
        .unwrap();
    assert_eq!(user.role, Role::Student);

    let updated = user::Mutation::update_role(db, user.id, Role::Instructor).await.unwrap();
    assert_eq!(updated.role, Role::Instructor);
    assert_eq!(updated.name, Some("Ada".to_owned()));

    let users = user::Query::all(db).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, Role::Instructor);
}

#[test(tokio::test)]
async fn test_ensure_user_does_not_overwrite() {
    let db = &test_db().await;
    let user = create_test_user(db).await;

    user::Mutation::ensure_user(db, user.id, Some("Other".to_owned()), None, Role::Admin)
        .await
        .unwrap();

    let stored = user::Query::find_user_by_id(db, user.id).await.unwrap().unwrap();
    assert_eq!(stored.name, user.name);
    assert_eq!(stored.role, Role::Student);
}
