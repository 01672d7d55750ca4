use crate::error::CoreError;
use crate::progress::percentage;
use futures_util::future::try_join4;
use lectern_db::{course, enrollment, lesson, progress, review};
use lectern_entity::enrollment::Model as EnrollmentModel;
use lectern_entity::progress::Model as ProgressModel;
use lectern_model::analytics::{Analytics, CourseAnalytics};
use lectern_model::course::average_rating;
use lectern_model::price::Price;
use lectern_model::rating::Rating;
use sea_orm::ConnectionTrait;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Enrollment, rating and completion figures for every course of the instructor.
pub async fn instructor_analytics<C: ConnectionTrait>(conn: &C, instructor_id: Uuid) -> Result<Analytics, CoreError> {
    let courses = course::Query::for_instructor(conn, instructor_id).await?;

    let mut analytics = Vec::with_capacity(courses.len());
    for course in courses {
        let (enrollments, ratings, lesson_ids, completed) = try_join4(
            enrollment::Query::for_course(conn, course.id),
            review::Query::ratings_for_courses(conn, vec![course.id]),
            lesson::Query::ids_for_course(conn, course.id),
            progress::Query::completed_for_course_all_users(conn, course.id),
        )
        .await?;

        let ratings: Vec<Rating> = ratings
            .into_iter()
            .filter_map(|(_, rating)| Rating::new(i64::from(rating)).ok())
            .collect();
        let enrollment_count = enrollments.len() as u64;
        let price = Price::from_cents(course.price_cents).map_err(lectern_model_tools::error::Error::from)?;

        analytics.push(CourseAnalytics {
            course_id: course.id,
            title: course.title,
            published: course.published,
            enrollments: enrollment_count,
            reviews: ratings.len() as u64,
            average_rating: average_rating(&ratings),
            average_completion: average_completion(&enrollments, &lesson_ids, &completed),
            revenue: price.saturating_mul(enrollment_count),
        });
    }

    Ok(Analytics::new(analytics))
}

/// Mean completion percentage over the enrolled users. Progress of users that are no longer
/// enrolled does not count.
#[allow(clippy::cast_precision_loss)]
fn average_completion(enrollments: &[EnrollmentModel], lesson_ids: &[Uuid], completed: &[ProgressModel]) -> f64 {
    if enrollments.is_empty() {
        return 0.0;
    }
    let lessons: HashSet<&Uuid> = lesson_ids.iter().collect();
    let mut per_user: HashMap<Uuid, usize> = HashMap::new();
    for progress in completed.iter().filter(|progress| lessons.contains(&progress.lesson_id)) {
        *per_user.entry(progress.user_id).or_default() += 1;
    }

    let total: f64 = enrollments
        .iter()
        .map(|enrollment| percentage(per_user.get(&enrollment.user_id).copied().unwrap_or(0), lessons.len()))
        .sum();
    total / enrollments.len() as f64
}
