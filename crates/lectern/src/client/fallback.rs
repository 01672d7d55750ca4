//! Catalog reads that fall back to the bundled catalog while the server is unreachable.

use crate::client::base::PublicClient;
use crate::error::Error;
use lectern_config::catalog::Catalog;
use lectern_model::course::{CourseDetail, CourseQuery, CourseSummary};
use uuid::Uuid;

fn bundled_catalog() -> Catalog {
    Catalog::bundled().unwrap_or_else(|error| {
        tracing::error!(error = &error as &dyn std::error::Error, "bundled catalog is invalid");
        Catalog::default()
    })
}

fn matches_query(course: &CourseSummary, query: &CourseQuery) -> bool {
    let category = query
        .category
        .as_ref()
        .is_none_or(|category| &course.category == category);
    let level = query.level.is_none_or(|level| course.level == level);
    let search = query.q.as_deref().map(str::trim).is_none_or(|q| {
        q.is_empty() || course.title.to_lowercase().contains(&q.to_lowercase())
    });
    category && level && search
}

fn mock_courses(query: &CourseQuery) -> Vec<CourseSummary> {
    bundled_catalog()
        .course_summaries()
        .into_iter()
        .filter(|course| matches_query(course, query))
        .collect()
}

/// Published courses from the server, or from the bundled catalog if the server is unreachable.
pub async fn courses_or_mock<C: PublicClient + ?Sized>(
    client: &C,
    query: &CourseQuery,
) -> Result<Vec<CourseSummary>, Error> {
    match client.courses(query).await {
        Err(error) if error.is_unreachable() => {
            tracing::warn!(error = &error as &dyn std::error::Error, "server unreachable, using bundled catalog");
            Ok(mock_courses(query))
        }
        res => res,
    }
}

/// Course detail from the server, or from the bundled catalog if the server is unreachable.
///
/// Returns `None` if the course is unknown.
pub async fn course_or_mock<C: PublicClient + ?Sized>(client: &C, course_id: Uuid) -> Result<Option<CourseDetail>, Error> {
    match client.course(course_id).await {
        Ok(detail) => Ok(Some(detail)),
        Err(error) if error.status() == Some(http::StatusCode::NOT_FOUND) => Ok(None),
        Err(error) if error.is_unreachable() => {
            tracing::warn!(error = &error as &dyn std::error::Error, %course_id, "server unreachable, using bundled catalog");
            Ok(bundled_catalog().course_detail(course_id))
        }
        Err(error) => Err(error),
    }
}
