use chrono::Utc;
use lectern_entity::course::{Entity as Course, Level, Model as CourseModel};
use lectern_entity::lesson::{Entity as Lesson, Model as LessonModel};
use lectern_entity::section::{Entity as Section, Model as SectionModel};
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel};
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestCourse {
    pub course: CourseModel,
    pub sections: Vec<SectionModel>,
    /// Curriculum order
    pub lessons: Vec<LessonModel>,
}

/// Creates a published course with `sections.len()` sections holding the given number of lessons.
///
/// Sections and lessons are inserted in reverse order so tests notice when ordering relies on
/// insertion order.
#[allow(dead_code)]
pub async fn create_test_course(db: &DatabaseConnection, instructor_id: Uuid, sections: &[usize]) -> TestCourse {
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
        published: true,
        created_at: now,
        updated_at: now,
    };
    Course::insert(course.clone().into_active_model()).exec(db).await.unwrap();

    let mut section_models = Vec::new();
    let mut lesson_models = Vec::new();
    for (section_position, lesson_count) in sections.iter().enumerate() {
        let section = SectionModel {
            id: Uuid::new_v4(),
            course_id: course.id,
            title: format!("Section {section_position}"),
            position: i32::try_from(section_position).unwrap(),
        };
        for lesson_position in 0..*lesson_count {
            lesson_models.push(LessonModel {
                id: Uuid::new_v4(),
                section_id: section.id,
                course_id: course.id,
                title: format!("Lesson {section_position}.{lesson_position}"),
                duration_minutes: 10,
                position: i32::try_from(lesson_position).unwrap(),
            });
        }
        section_models.push(section);
    }

    for section in section_models.iter().rev() {
        Section::insert(section.clone().into_active_model()).exec(db).await.unwrap();
    }
    for lesson in lesson_models.iter().rev() {
        Lesson::insert(lesson.clone().into_active_model()).exec(db).await.unwrap();
    }

    TestCourse {
        course,
        sections: section_models,
        lessons: lesson_models,
    }
}
