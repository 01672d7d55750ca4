use crate::price::Price;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseAnalytics {
    pub course_id: Uuid,
    pub title: String,
    pub published: bool,
    pub enrollments: u64,
    pub reviews: u64,
    pub average_rating: f64,
    /// Mean completion percentage over enrolled students
    pub average_completion: f64,
    /// Enrollments times the current price
    pub revenue: Price,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Analytics {
    pub courses: Vec<CourseAnalytics>,
    pub total_enrollments: u64,
    pub total_revenue: Price,
}

impl Analytics {
    #[must_use]
    pub fn new(courses: Vec<CourseAnalytics>) -> Self {
        let total_enrollments = courses.iter().map(|course| course.enrollments).sum();
        let total_revenue = courses.iter().map(|course| course.revenue).sum();
        Self {
            courses,
            total_enrollments,
            total_revenue,
        }
    }
}
