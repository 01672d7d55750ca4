use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Title reported when every lesson of a course is completed.
pub const ALL_LESSONS_COMPLETED: &str = "All lessons completed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NextLesson {
    /// `None` once every lesson is completed
    pub lesson_id: Option<Uuid>,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseProgress {
    pub course_id: Uuid,
    pub completed_lessons: usize,
    pub total_lessons: usize,
    /// 0 to 100
    pub percentage: f64,
    pub next_lesson: NextLesson,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct LessonProgress {
    pub completed: bool,
}
