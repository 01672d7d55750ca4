//! Rows for tests that need a populated catalog.

use chrono::Utc;
use lectern_entity::course::{Entity as Course, Level, Model as CourseModel};
use lectern_entity::lesson::{Entity as Lesson, Model as LessonModel};
use lectern_entity::section::{Entity as Section, Model as SectionModel};
use lectern_entity::user::{Entity as User, Model as UserModel, Role};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, IntoActiveModel};
use uuid::Uuid;

pub async fn create_user<C: ConnectionTrait>(db: &C, role: Role) -> Result<UserModel, DbErr> {
    let user = UserModel {
        id: Uuid::new_v4(),
        name: Some(format!("{role:?} user")),
        email: None,
        role,
        created_at: Utc::now().naive_utc(),
    };
    User::insert(user.clone().into_active_model()).exec(db).await?;
    Ok(user)
}

pub struct TestCourse {
    pub course: CourseModel,
    pub sections: Vec<SectionModel>,
    /// Curriculum order
    pub lessons: Vec<LessonModel>,
}

/// Creates a course with one section per entry of `sections`, each holding that many lessons.
pub async fn create_course<C: ConnectionTrait>(
    db: &C,
    instructor_id: Uuid,
    published: bool,
    sections: &[i32],
) -> Result<TestCourse, DbErr> {
    let now = Utc::now().naive_utc();
    let course = CourseModel {
        id: Uuid::new_v4(),
        title: "Test Course".to_owned(),
        instructor_id,
        price_cents: 4999,
        original_price_cents: Some(9999),
        category: "Programming".to_owned(),
        level: Level::Beginner,
        duration_minutes: 120,
        description: "A course for tests".to_owned(),
        published,
        created_at: now,
        updated_at: now,
    };
    Course::insert(course.clone().into_active_model()).exec(db).await?;

    let mut section_models = Vec::new();
    let mut lesson_models = Vec::new();
    for (section_position, lesson_count) in (0..).zip(sections) {
        let section = SectionModel {
            id: Uuid::new_v4(),
            course_id: course.id,
            title: format!("Section {section_position}"),
            position: section_position,
        };
        Section::insert(section.clone().into_active_model()).exec(db).await?;
        for lesson_position in 0..*lesson_count {
            let lesson = LessonModel {
                id: Uuid::new_v4(),
                section_id: section.id,
                course_id: course.id,
                title: format!("Lesson {section_position}.{lesson_position}"),
                duration_minutes: 10,
                position: lesson_position,
            };
            Lesson::insert(lesson.clone().into_active_model()).exec(db).await?;
            lesson_models.push(lesson);
        }
        section_models.push(section);
    }

    Ok(TestCourse {
        course,
        sections: section_models,
        lessons: lesson_models,
    })
}
