mod common;

use crate::common::course::create_test_course;
use crate::common::test_db;
use crate::common::user::{create_test_user, create_test_user_with_role};
use lectern_db::review;
use lectern_entity::review::Entity as Review;
use lectern_entity::user::Role;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_log::test;

#[test(tokio::test)]
async fn test_update_review_in_place() {
    let db = &test_db().await;
    let instructor = create_test_user_with_role(db, Role::Instructor).await;
    let student = create_test_user(db).await;
    let course = create_test_course(db, instructor.id, &[1]).await.course;

    let created = review::Mutation::insert(db, student.id, course.id, 3, "ok".to_owned())
        .await
        .unwrap();
    let updated = review::Mutation::update(db, student.id, course.id, 5, "great".to_owned())
        .await
        .unwrap();

    assert_eq!(Review::find().count(db).await.unwrap(), 1);
    assert_eq!(updated.rating, 5);
    assert_eq!(updated.comment, "great");
    assert_eq!(updated.created_at, created.created_at);
}

#[test(tokio::test)]
async fn test_reviews_for_course_with_author() {
    let db = &test_db().await;
    let instructor = create_test_user_with_role(db, Role::Instructor).await;
    let first = create_test_user(db).await;
    let second = create_test_user(db).await;
    let course = create_test_course(db, instructor.id, &[1]).await.course;
    let other = create_test_course(db, instructor.id, &[1]).await.course;

    review::Mutation::insert(db, first.id, course.id, 4, String::new()).await.unwrap();
    review::Mutation::insert(db, second.id, course.id, 2, String::new()).await.unwrap();
    review::Mutation::insert(db, first.id, other.id, 1, String::new()).await.unwrap();

    let reviews = review::Query::for_course(db, course.id).await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].0.user_id, second.id);
    assert_eq!(reviews[0].1.as_ref().and_then(|u| u.name.clone()), second.name);

    let mut ratings = review::Query::ratings_for_courses(db, vec![course.id]).await.unwrap();
    ratings.sort_by_key(|(_, rating)| *rating);
    assert_eq!(ratings, [(course.id, 2), (course.id, 4)]);
}
