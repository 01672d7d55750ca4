use crate::error::CoreError;
use lectern_db::{enrollment, review};
use lectern_model::rating::Rating;
use sea_orm::ConnectionTrait;
use std::error::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Created,
    Updated,
    NotEnrolled,
    Failed,
}

impl ReviewOutcome {
    #[must_use]
    pub fn succeeded(self) -> bool {
        matches!(self, Self::Created | Self::Updated)
    }
}

/// Creates the user's review of a course or replaces rating and comment of the existing one.
pub async fn submit_review<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
    rating: Rating,
    comment: String,
) -> ReviewOutcome {
    try_submit_review(conn, user_id, course_id, rating, comment)
        .await
        .unwrap_or_else(|error| {
            tracing::error!(error = &error as &dyn Error, %user_id, %course_id, "failed to submit review");
            ReviewOutcome::Failed
        })
}

async fn try_submit_review<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
    rating: Rating,
    comment: String,
) -> Result<ReviewOutcome, CoreError> {
    if !enrollment::Query::is_enrolled(conn, user_id, course_id).await? {
        return Ok(ReviewOutcome::NotEnrolled);
    }

    if review::Query::get(conn, user_id, course_id).await?.is_some() {
        review::Mutation::update(conn, user_id, course_id, rating.into(), comment).await?;
        Ok(ReviewOutcome::Updated)
    } else {
        review::Mutation::insert(conn, user_id, course_id, rating.into(), comment).await?;
        Ok(ReviewOutcome::Created)
    }
}
