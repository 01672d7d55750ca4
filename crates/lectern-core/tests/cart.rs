use lectern_core::cart::{CartOutcome, add_to_cart, cart, checkout, remove_from_cart};
use lectern_core::enrollment::enroll;
use lectern_db::enrollment;
use lectern_entity::cart::Entity as Cart;
use lectern_entity::user::Role;
use lectern_test_helpers::fixtures::{create_course, create_user};
use lectern_test_helpers::memory_db;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_log::test;

#[test(tokio::test)]
async fn test_enrolled_course_cannot_be_added() {
    let db = &memory_db().await.unwrap();
    let instructor = create_user(db, Role::Instructor).await.unwrap();
    let student = create_user(db, Role::Student).await.unwrap();
    let course = create_course(db, instructor.id, true, &[1]).await.unwrap().course;

    enroll(db, student.id, course.id).await;
    let outcome = add_to_cart(db, student.id, course.id).await;
    assert_eq!(outcome, CartOutcome::AlreadyEnrolled);
    assert!(!outcome.succeeded());
    assert_eq!(Cart::find().count(db).await.unwrap(), 0);
}

#[test(tokio::test)]
async fn test_enrolled_course_with_stale_cart_row_cannot_be_added() {
    let db = &memory_db().await.unwrap();
    let instructor = create_user(db, Role::Instructor).await.unwrap();
    let student = create_user(db, Role::Student).await.unwrap();
    let course = create_course(db, instructor.id, true, &[1]).await.unwrap().course;

    enroll(db, student.id, course.id).await;
    assert!(lectern_db::cart::Mutation::insert(db, student.id, course.id).await.unwrap());

    let outcome = add_to_cart(db, student.id, course.id).await;
    assert_eq!(outcome, CartOutcome::AlreadyEnrolled);
    assert!(!outcome.succeeded());
    assert_eq!(Cart::find().count(db).await.unwrap(), 0);
}

#[test(tokio::test)]
async fn test_add_twice_and_remove() {
    let db = &memory_db().await.unwrap();
    let instructor = create_user(db, Role::Instructor).await.unwrap();
    let student = create_user(db, Role::Student).await.unwrap();
    let course = create_course(db, instructor.id, true, &[1]).await.unwrap().course;

    assert_eq!(add_to_cart(db, student.id, course.id).await, CartOutcome::Added);
    assert_eq!(add_to_cart(db, student.id, course.id).await, CartOutcome::AlreadyInCart);
    assert_eq!(Cart::find().count(db).await.unwrap(), 1);

    assert!(remove_from_cart(db, student.id, course.id).await);
    assert!(remove_from_cart(db, student.id, course.id).await);
    assert!(cart(db, student.id).await.items.is_empty());
}

#[test(tokio::test)]
async fn test_unpublished_course_cannot_be_added() {
    let db = &memory_db().await.unwrap();
    let instructor = create_user(db, Role::Instructor).await.unwrap();
    let student = create_user(db, Role::Student).await.unwrap();
    let draft = create_course(db, instructor.id, false, &[1]).await.unwrap().course;

    assert_eq!(add_to_cart(db, student.id, draft.id).await, CartOutcome::CourseUnavailable);
}

#[test(tokio::test)]
async fn test_cart_totals() {
    let db = &memory_db().await.unwrap();
    let instructor = create_user(db, Role::Instructor).await.unwrap();
    let student = create_user(db, Role::Student).await.unwrap();
    let first = create_course(db, instructor.id, true, &[1]).await.unwrap().course;
    let second = create_course(db, instructor.id, true, &[1]).await.unwrap().course;

    add_to_cart(db, student.id, first.id).await;
    add_to_cart(db, student.id, second.id).await;

    let cart = cart(db, student.id).await;
    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.subtotal.cents(), 2 * 4999);
    assert_eq!(cart.savings.cents(), 2 * 5000);
}

#[test(tokio::test)]
async fn test_checkout_enrolls_every_course() {
    let db = &memory_db().await.unwrap();
    let instructor = create_user(db, Role::Instructor).await.unwrap();
    let student = create_user(db, Role::Student).await.unwrap();
    let first = create_course(db, instructor.id, true, &[1]).await.unwrap().course;
    let second = create_course(db, instructor.id, true, &[1]).await.unwrap().course;

    add_to_cart(db, student.id, first.id).await;
    add_to_cart(db, student.id, second.id).await;

    let checkout = checkout(db, student.id).await.unwrap();
    assert_eq!(checkout.enrolled.len(), 2);
    assert!(checkout.failed.is_empty());
    assert!(enrollment::Query::is_enrolled(db, student.id, first.id).await.unwrap());
    assert!(enrollment::Query::is_enrolled(db, student.id, second.id).await.unwrap());
    assert_eq!(Cart::find().count(db).await.unwrap(), 0);
}
