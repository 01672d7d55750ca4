use lectern_core::authoring::{
    add_lesson, add_section, create_course, instructor_course_detail, instructor_courses, set_published,
    update_course,
};
use lectern_core::catalog::course_detail;
use lectern_core::error::CoreError;
use lectern_entity::user::Role;
use lectern_model::course::{CourseUpdate, Level, NewCourse, NewLesson, NewSection};
use lectern_model::price::Price;
use lectern_test_helpers::fixtures::create_user;
use lectern_test_helpers::memory_db;
use test_log::test;
use uuid::Uuid;

fn new_course() -> NewCourse {
    NewCourse {
        title: "Intro to Rust".to_owned(),
        price: Price::from_cents(2999).unwrap(),
        original_price: None,
        category: "Programming".to_owned(),
        level: Level::Beginner,
        duration_minutes: 300,
        description: "Ownership and borrowing".to_owned(),
    }
}

#[test(tokio::test)]
async fn test_build_and_publish_course() {
    let db = &memory_db().await.unwrap();
    let instructor = create_user(db, Role::Instructor).await.unwrap();

    let course = create_course(db, instructor.id, new_course()).await.unwrap();
    assert!(!course.published);
    assert!(course_detail(db, course.id).await.is_none());

    let first = add_section(db, instructor.id, course.id, NewSection { title: "Basics".to_owned() })
        .await
        .unwrap();
    let second = add_section(db, instructor.id, course.id, NewSection { title: "Traits".to_owned() })
        .await
        .unwrap();
    assert_eq!((first.position, second.position), (0, 1));

    let lesson = NewLesson {
        title: "Borrowing".to_owned(),
        duration_minutes: 12,
    };
    let lesson = add_lesson(db, instructor.id, course.id, second.id, lesson).await.unwrap();
    assert_eq!(lesson.position, 0);

    let detail = instructor_course_detail(db, instructor.id, course.id).await.unwrap();
    assert_eq!(detail.sections[1].lessons[0].id, lesson.id);

    set_published(db, instructor.id, course.id, true).await.unwrap();
    assert!(course_detail(db, course.id).await.is_some());
    assert_eq!(instructor_courses(db, instructor.id).await.unwrap().len(), 1);
}

#[test(tokio::test)]
async fn test_foreign_course_is_rejected() {
    let db = &memory_db().await.unwrap();
    let owner = create_user(db, Role::Instructor).await.unwrap();
    let other = create_user(db, Role::Instructor).await.unwrap();
    let course = create_course(db, owner.id, new_course()).await.unwrap();

    let res = update_course(
        db,
        other.id,
        course.id,
        CourseUpdate {
            title: Some("Stolen".to_owned()),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(res, Err(CoreError::NotOwner)));
    assert!(matches!(
        set_published(db, other.id, course.id, true).await,
        Err(CoreError::NotOwner)
    ));
    assert!(matches!(
        set_published(db, other.id, Uuid::new_v4(), true).await,
        Err(CoreError::NotFound(_))
    ));
}

#[test(tokio::test)]
async fn test_update_course() {
    let db = &memory_db().await.unwrap();
    let instructor = create_user(db, Role::Instructor).await.unwrap();
    let course = create_course(db, instructor.id, new_course()).await.unwrap();

    let updated = update_course(
        db,
        instructor.id,
        course.id,
        CourseUpdate {
            price: Some(Price::from_cents(1999).unwrap()),
            original_price: Some(Some(Price::from_cents(2999).unwrap())),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.title, "Intro to Rust");
    assert_eq!(updated.price.cents(), 1999);
    assert_eq!(updated.original_price.map(Price::cents), Some(2999));

    let invalid = update_course(
        db,
        instructor.id,
        course.id,
        CourseUpdate {
            title: Some(" ".to_owned()),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(invalid, Err(CoreError::Invalid(_))));
}

#[test(tokio::test)]
async fn test_lesson_in_section_of_other_course() {
    let db = &memory_db().await.unwrap();
    let instructor = create_user(db, Role::Instructor).await.unwrap();
    let first = create_course(db, instructor.id, new_course()).await.unwrap();
    let second = create_course(db, instructor.id, new_course()).await.unwrap();
    let section = add_section(db, instructor.id, first.id, NewSection { title: "One".to_owned() })
        .await
        .unwrap();

    let lesson = NewLesson {
        title: "Misplaced".to_owned(),
        duration_minutes: 1,
    };
    let res = add_lesson(db, instructor.id, second.id, section.id, lesson).await;
    assert!(matches!(res, Err(CoreError::NotFound("section"))));
}
