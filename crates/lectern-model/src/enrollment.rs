use crate::progress::CourseProgress;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentState {
    Enrolled,
    AlreadyEnrolled,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Enrollment {
    pub course_id: Uuid,
    pub state: EnrollmentState,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrolledCourse {
    pub course_id: Uuid,
    pub title: String,
    pub enrolled_at: NaiveDateTime,
    pub last_accessed: NaiveDateTime,
    pub progress: CourseProgress,
}
