mod common;

use crate::common::course::create_test_course;
use crate::common::test_db;
use crate::common::user::{create_test_user, create_test_user_with_role};
use lectern_db::enrollment;
use lectern_entity::enrollment::Entity as Enrollment;
use lectern_entity::user::Role;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_log::test;

#[test(tokio::test)]
async fn test_create_enrollment_once() {
    let db = &test_db().await;
    let instructor = create_test_user_with_role(db, Role::Instructor).await;
    let student = create_test_user(db).await;
    let course = create_test_course(db, instructor.id, &[1]).await.course;

    assert!(enrollment::Mutation::create(db, student.id, course.id).await.unwrap());
    assert!(!enrollment::Mutation::create(db, student.id, course.id).await.unwrap());

    assert_eq!(Enrollment::find().count(db).await.unwrap(), 1);
    assert!(enrollment::Query::is_enrolled(db, student.id, course.id).await.unwrap());
}

#[test(tokio::test)]
async fn test_touch_updates_last_accessed() {
    let db = &test_db().await;
    let instructor = create_test_user_with_role(db, Role::Instructor).await;
    let student = create_test_user(db).await;
    let course = create_test_course(db, instructor.id, &[1]).await.course;

    assert!(!enrollment::Mutation::touch(db, student.id, course.id).await.unwrap());

    enrollment::Mutation::create(db, student.id, course.id).await.unwrap();
    let before = enrollment::Query::get(db, student.id, course.id).await.unwrap().unwrap();
    assert!(enrollment::Mutation::touch(db, student.id, course.id).await.unwrap());
    let after = enrollment::Query::get(db, student.id, course.id).await.unwrap().unwrap();

    assert_eq!(before.enrolled_at, after.enrolled_at);
    assert!(after.last_accessed >= before.last_accessed);
}

#[test(tokio::test)]
async fn test_enrollments_for_user_include_course() {
    let db = &test_db().await;
    let instructor = create_test_user_with_role(db, Role::Instructor).await;
    let student = create_test_user(db).await;
    let first = create_test_course(db, instructor.id, &[1]).await.course;
    let second = create_test_course(db, instructor.id, &[1]).await.course;

    enrollment::Mutation::create(db, student.id, first.id).await.unwrap();
    enrollment::Mutation::create(db, student.id, second.id).await.unwrap();
    enrollment::Mutation::touch(db, student.id, first.id).await.unwrap();

    let enrollments = enrollment::Query::for_user(db, student.id).await.unwrap();
    assert_eq!(enrollments.len(), 2);
    assert_eq!(enrollments[0].0.course_id, first.id);
    assert_eq!(enrollments[0].1.as_ref().map(|c| c.id), Some(first.id));

    let for_course = enrollment::Query::for_course(db, second.id).await.unwrap();
    assert_eq!(for_course.len(), 1);
    assert_eq!(for_course[0].user_id, student.id);
}
