//! Read side of the course catalog.
//!
//! The public functions never fail: database errors are logged and reported as an empty result.

use crate::error::CoreError;
use futures_util::future::try_join3;
use lectern_db::course::CourseFilter;
use lectern_db::{course, lesson, review, section};
use lectern_entity::{
    course as course_entity, lesson as lesson_entity, review as review_entity, section as section_entity, user,
};
use lectern_model::course::{CourseDetail, CourseSummary, Section};
use lectern_model::rating::Rating;
use lectern_model::review::Review;
use lectern_model_tools::convert::{FromDbModel, TryFromDbModel};
use sea_orm::ConnectionTrait;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

pub async fn list_published_courses<C: ConnectionTrait>(conn: &C, filter: &CourseFilter) -> Vec<CourseSummary> {
    load_published(conn, filter).await.unwrap_or_else(|error| {
        tracing::error!(error = &error as &dyn Error, ?filter, "failed to list published courses");
        Vec::new()
    })
}

/// Published course with curriculum, reviews and instructor.
pub async fn course_detail<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Option<CourseDetail> {
    match load_detail(conn, course_id).await {
        Ok(Some(detail)) if detail.summary.published => Some(detail),
        Ok(_) => None,
        Err(error) => {
            tracing::error!(error = &error as &dyn Error, %course_id, "failed to load course detail");
            None
        }
    }
}

/// Reviews of a course, newest first.
pub async fn reviews<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Vec<Review> {
    load_reviews(conn, course_id).await.unwrap_or_else(|error| {
        tracing::error!(error = &error as &dyn Error, %course_id, "failed to load reviews");
        Vec::new()
    })
}

async fn load_published<C: ConnectionTrait>(conn: &C, filter: &CourseFilter) -> Result<Vec<CourseSummary>, CoreError> {
    let courses = course::Query::published(conn, filter).await?;
    summaries(conn, courses).await
}

async fn summaries<C: ConnectionTrait>(
    conn: &C,
    courses: Vec<(course_entity::Model, Option<user::Model>)>,
) -> Result<Vec<CourseSummary>, CoreError> {
    let ids = courses.iter().map(|(course, _)| course.id).collect();
    let mut ratings = group_ratings(review::Query::ratings_for_courses(conn, ids).await?);

    let mut summaries = Vec::with_capacity(courses.len());
    for (course, instructor) in courses {
        let ratings = ratings.remove(&course.id).unwrap_or_default();
        summaries.push(CourseSummary::try_from_db_model((course, instructor, ratings))?);
    }
    Ok(summaries)
}

pub(crate) async fn load_detail<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Option<CourseDetail>, CoreError> {
    let Some((course, instructor)) = course::Query::find_with_instructor(conn, course_id).await? else {
        return Ok(None);
    };

    let (sections, lessons, reviews) = try_join3(
        section::Query::for_course(conn, course_id),
        lesson::Query::for_course(conn, course_id),
        review::Query::for_course(conn, course_id),
    )
    .await?;

    let reviews = valid_reviews(course_id, reviews);
    let ratings = reviews.iter().map(|review| review.rating).collect();
    let description = course.description.clone();
    let summary = CourseSummary::try_from_db_model((course, instructor, ratings))?;

    Ok(Some(CourseDetail {
        summary,
        description,
        sections: curriculum(sections, lessons),
        reviews,
    }))
}

async fn load_reviews<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Vec<Review>, CoreError> {
    Ok(valid_reviews(course_id, review::Query::for_course(conn, course_id).await?))
}

/// Converts stored reviews, skipping rows whose rating is out of range.
fn valid_reviews(course_id: Uuid, rows: Vec<(review_entity::Model, Option<user::Model>)>) -> Vec<Review> {
    rows.into_iter()
        .filter_map(|row| match Review::try_from_db_model(row) {
            Ok(review) => Some(review),
            Err(error) => {
                tracing::warn!(error = &error as &dyn Error, %course_id, "ignoring review with invalid stored rating");
                None
            }
        })
        .collect()
}

/// Attaches lessons to their sections, keeping both orderings.
pub(crate) fn curriculum(sections: Vec<section_entity::Model>, lessons: Vec<lesson_entity::Model>) -> Vec<Section> {
    let mut by_section: HashMap<Uuid, Vec<lesson_entity::Model>> = HashMap::new();
    for lesson in lessons {
        by_section.entry(lesson.section_id).or_default().push(lesson);
    }
    sections
        .into_iter()
        .map(|section| {
            let lessons = by_section.remove(&section.id).unwrap_or_default();
            Section::from_db_model((section, lessons))
        })
        .collect()
}

fn group_ratings(ratings: Vec<(Uuid, i16)>) -> HashMap<Uuid, Vec<Rating>> {
    let mut grouped: HashMap<Uuid, Vec<Rating>> = HashMap::new();
    for (course_id, rating) in ratings {
        match Rating::new(i64::from(rating)) {
            Ok(rating) => grouped.entry(course_id).or_default().push(rating),
            Err(error) => tracing::warn!(error = &error as &dyn Error, %course_id, "ignoring invalid stored rating"),
        }
    }
    grouped
}
