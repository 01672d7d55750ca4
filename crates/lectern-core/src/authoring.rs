//! Course management for instructors. Every operation checks that the course belongs to the
//! acting instructor.

use crate::catalog::load_detail;
use crate::error::CoreError;
use lectern_db::course::{CourseChanges, NewCourse as NewCourseRecord};
use lectern_db::{course, lesson, section};
use lectern_entity::course::Model as CourseModel;
use lectern_model::course::{
    CourseDetail, CourseUpdate, InstructorCourse, Lesson, NewCourse, NewLesson, NewSection, Section,
};
use lectern_model_tools::convert::{FromDbModel, IntoDbModel, TryFromDbModel};
use sea_orm::{ConnectionTrait, TransactionTrait};
use uuid::Uuid;

fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Invalid("title must not be empty".to_owned()));
    }
    Ok(())
}

fn validate_duration(duration_minutes: i32) -> Result<(), CoreError> {
    if duration_minutes < 0 {
        return Err(CoreError::Invalid("duration must not be negative".to_owned()));
    }
    Ok(())
}

async fn owned_course<C: ConnectionTrait>(conn: &C, instructor_id: Uuid, course_id: Uuid) -> Result<CourseModel, CoreError> {
    let course = course::Query::find_by_id(conn, course_id)
        .await?
        .ok_or(CoreError::NotFound("course"))?;
    if course.instructor_id != instructor_id {
        tracing::warn!(%instructor_id, %course_id, "instructor tried to modify foreign course");
        return Err(CoreError::NotOwner);
    }
    Ok(course)
}

pub async fn instructor_courses<C: ConnectionTrait>(
    conn: &C,
    instructor_id: Uuid,
) -> Result<Vec<InstructorCourse>, CoreError> {
    let courses = course::Query::for_instructor(conn, instructor_id).await?;
    Ok(courses
        .into_iter()
        .map(InstructorCourse::try_from_db_model)
        .collect::<Result<_, _>>()?)
}

/// Full course view for its instructor, including unpublished courses.
pub async fn instructor_course_detail<C: ConnectionTrait>(
    conn: &C,
    instructor_id: Uuid,
    course_id: Uuid,
) -> Result<CourseDetail, CoreError> {
    owned_course(conn, instructor_id, course_id).await?;
    load_detail(conn, course_id).await?.ok_or(CoreError::NotFound("course"))
}

pub async fn create_course<C: ConnectionTrait>(
    conn: &C,
    instructor_id: Uuid,
    course: NewCourse,
) -> Result<InstructorCourse, CoreError> {
    validate_title(&course.title)?;
    validate_duration(course.duration_minutes)?;

    let record = NewCourseRecord {
        title: course.title,
        price_cents: course.price.cents(),
        original_price_cents: course.original_price.map(|price| price.cents()),
        category: course.category,
        level: course.level.into_db_model(),
        duration_minutes: course.duration_minutes,
        description: course.description,
    };
    let created = course::Mutation::create(conn, instructor_id, record).await?;
    tracing::info!(%instructor_id, course_id = %created.id, "course created");
    Ok(InstructorCourse::try_from_db_model(created)?)
}

pub async fn update_course<C: ConnectionTrait>(
    conn: &C,
    instructor_id: Uuid,
    course_id: Uuid,
    update: CourseUpdate,
) -> Result<InstructorCourse, CoreError> {
    if let Some(title) = &update.title {
        validate_title(title)?;
    }
    if let Some(duration) = update.duration_minutes {
        validate_duration(duration)?;
    }
    owned_course(conn, instructor_id, course_id).await?;

    let changes = CourseChanges {
        title: update.title,
        price_cents: update.price.map(|price| price.cents()),
        original_price_cents: update.original_price.map(|price| price.map(|price| price.cents())),
        category: update.category,
        level: update.level.map(IntoDbModel::into_db_model),
        duration_minutes: update.duration_minutes,
        description: update.description,
    };
    let updated = course::Mutation::update(conn, course_id, changes).await?;
    Ok(InstructorCourse::try_from_db_model(updated)?)
}

pub async fn set_published<C: ConnectionTrait>(
    conn: &C,
    instructor_id: Uuid,
    course_id: Uuid,
    published: bool,
) -> Result<InstructorCourse, CoreError> {
    owned_course(conn, instructor_id, course_id).await?;
    let updated = course::Mutation::set_published(conn, course_id, published).await?;
    tracing::info!(%instructor_id, %course_id, published, "course visibility changed");
    Ok(InstructorCourse::try_from_db_model(updated)?)
}

pub async fn add_section<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    instructor_id: Uuid,
    course_id: Uuid,
    section: NewSection,
) -> Result<Section, CoreError> {
    validate_title(&section.title)?;
    owned_course(conn, instructor_id, course_id).await?;
    let created = section::Mutation::append(conn, course_id, section.title).await?;
    Ok(Section::from_db_model((created, Vec::new())))
}

pub async fn add_lesson<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    instructor_id: Uuid,
    course_id: Uuid,
    section_id: Uuid,
    lesson: NewLesson,
) -> Result<Lesson, CoreError> {
    validate_title(&lesson.title)?;
    validate_duration(lesson.duration_minutes)?;
    owned_course(conn, instructor_id, course_id).await?;

    let section = section::Query::find_by_id(conn, section_id)
        .await?
        .filter(|section| section.course_id == course_id)
        .ok_or(CoreError::NotFound("section"))?;
    let created = lesson::Mutation::append(conn, &section, lesson.title, lesson.duration_minutes).await?;
    Ok(Lesson::from_db_model(created))
}
