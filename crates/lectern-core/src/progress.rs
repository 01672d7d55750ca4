use crate::error::CoreError;
use futures_util::future::try_join;
use lectern_db::{enrollment, lesson, progress};
use lectern_entity::lesson::Model as LessonModel;
use lectern_model::progress::{ALL_LESSONS_COMPLETED, CourseProgress, NextLesson};
use sea_orm::ConnectionTrait;
use std::collections::HashSet;
use std::error::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressOutcome {
    Updated,
    /// The stored flag already had the requested value.
    Unchanged,
    NotEnrolled,
    /// The lesson does not exist or belongs to another course.
    UnknownLesson,
    Failed,
}

impl ProgressOutcome {
    #[must_use]
    pub fn succeeded(self) -> bool {
        matches!(self, Self::Updated | Self::Unchanged)
    }
}

/// Marks a lesson as completed or not completed and stamps the enrollment as accessed.
pub async fn update_progress<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
    lesson_id: Uuid,
    completed: bool,
) -> ProgressOutcome {
    try_update_progress(conn, user_id, course_id, lesson_id, completed)
        .await
        .unwrap_or_else(|error| {
            tracing::error!(error = &error as &dyn Error, %user_id, %course_id, %lesson_id, "failed to update progress");
            ProgressOutcome::Failed
        })
}

async fn try_update_progress<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
    lesson_id: Uuid,
    completed: bool,
) -> Result<ProgressOutcome, CoreError> {
    match lesson::Query::find_by_id(conn, lesson_id).await? {
        Some(lesson) if lesson.course_id == course_id => {}
        _ => return Ok(ProgressOutcome::UnknownLesson),
    }

    if !enrollment::Mutation::touch(conn, user_id, course_id).await? {
        return Ok(ProgressOutcome::NotEnrolled);
    }

    match progress::Query::get(conn, user_id, lesson_id).await? {
        None => {
            progress::Mutation::insert(conn, user_id, lesson_id, completed).await?;
            Ok(ProgressOutcome::Updated)
        }
        Some(current) if current.completed == completed => Ok(ProgressOutcome::Unchanged),
        Some(_) => {
            progress::Mutation::set_completed(conn, user_id, lesson_id, completed).await?;
            Ok(ProgressOutcome::Updated)
        }
    }
}

/// Progress of an enrolled user through a course, `None` if the user is not enrolled.
pub async fn course_progress<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Option<CourseProgress> {
    match load_course_progress(conn, user_id, course_id).await {
        Ok(progress) => progress,
        Err(error) => {
            tracing::error!(error = &error as &dyn Error, %user_id, %course_id, "failed to load course progress");
            None
        }
    }
}

async fn load_course_progress<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
) -> Result<Option<CourseProgress>, CoreError> {
    if !enrollment::Query::is_enrolled(conn, user_id, course_id).await? {
        return Ok(None);
    }
    Ok(Some(progress_for(conn, user_id, course_id).await?))
}

pub(crate) async fn progress_for<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
) -> Result<CourseProgress, CoreError> {
    let (lessons, completed) = try_join(
        lesson::Query::for_course(conn, course_id),
        progress::Query::completed_for_course(conn, user_id, course_id),
    )
    .await?;
    let completed: HashSet<Uuid> = completed.into_iter().map(|progress| progress.lesson_id).collect();
    Ok(compute_progress(course_id, &lessons, &completed))
}

/// Derives the progress view from the lessons of a course in curriculum order and the ids of the
/// lessons the user completed.
///
/// Completed ids that do not belong to the course are ignored.
#[must_use]
pub fn compute_progress(course_id: Uuid, lessons: &[LessonModel], completed: &HashSet<Uuid>) -> CourseProgress {
    let total_lessons = lessons.len();
    let completed_lessons = lessons.iter().filter(|lesson| completed.contains(&lesson.id)).count();
    let next_lesson = lessons
        .iter()
        .find(|lesson| !completed.contains(&lesson.id))
        .map_or_else(
            || NextLesson {
                lesson_id: None,
                title: ALL_LESSONS_COMPLETED.to_owned(),
            },
            |lesson| NextLesson {
                lesson_id: Some(lesson.id),
                title: lesson.title.clone(),
            },
        );

    CourseProgress {
        course_id,
        completed_lessons,
        total_lessons,
        percentage: percentage(completed_lessons, total_lessons),
        next_lesson,
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}
