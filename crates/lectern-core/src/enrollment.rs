use crate::error::CoreError;
use crate::progress::progress_for;
use lectern_db::{cart, course, enrollment};
use lectern_model::enrollment::EnrolledCourse;
use sea_orm::ConnectionTrait;
use std::error::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    AlreadyEnrolled,
    /// The course does not exist or is not published.
    CourseUnavailable,
    Failed,
}

impl EnrollOutcome {
    #[must_use]
    pub fn succeeded(self) -> bool {
        matches!(self, Self::Enrolled | Self::AlreadyEnrolled)
    }
}

/// Enrolls the user in a published course and removes the course from their cart.
///
/// Enrolling twice is not an error. The cart cleanup runs after the enrollment is stored and only
/// logs failures, so a crash in between can leave both rows behind.
pub async fn enroll<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> EnrollOutcome {
    let outcome = try_enroll(conn, user_id, course_id).await.unwrap_or_else(|error| {
        tracing::error!(error = &error as &dyn Error, %user_id, %course_id, "failed to enroll");
        EnrollOutcome::Failed
    });

    if outcome == EnrollOutcome::Enrolled
        && let Err(error) = cart::Mutation::delete(conn, user_id, course_id).await
    {
        tracing::warn!(error = &error as &dyn Error, %user_id, %course_id, "failed to remove enrolled course from cart");
    }

    outcome
}

async fn try_enroll<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Result<EnrollOutcome, CoreError> {
    if enrollment::Query::is_enrolled(conn, user_id, course_id).await? {
        return Ok(EnrollOutcome::AlreadyEnrolled);
    }

    match course::Query::find_by_id(conn, course_id).await? {
        Some(course) if course.published => {}
        _ => return Ok(EnrollOutcome::CourseUnavailable),
    }

    if enrollment::Mutation::create(conn, user_id, course_id).await? {
        tracing::info!(%user_id, %course_id, "user enrolled");
        Ok(EnrollOutcome::Enrolled)
    } else {
        Ok(EnrollOutcome::AlreadyEnrolled)
    }
}

/// Courses the user is enrolled in with their progress, most recently accessed first.
pub async fn enrolled_courses<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Vec<EnrolledCourse> {
    load_enrolled_courses(conn, user_id).await.unwrap_or_else(|error| {
        tracing::error!(error = &error as &dyn Error, %user_id, "failed to load enrolled courses");
        Vec::new()
    })
}

async fn load_enrolled_courses<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<EnrolledCourse>, CoreError> {
    let mut courses = Vec::new();
    for (enrollment, course) in enrollment::Query::for_user(conn, user_id).await? {
        let Some(course) = course else {
            tracing::warn!(%user_id, course_id = %enrollment.course_id, "enrollment without course");
            continue;
        };
        let progress = progress_for(conn, user_id, course.id).await?;
        courses.push(EnrolledCourse {
            course_id: course.id,
            title: course.title,
            enrolled_at: enrollment.enrolled_at,
            last_accessed: enrollment.last_accessed,
            progress,
        });
    }
    Ok(courses)
}
