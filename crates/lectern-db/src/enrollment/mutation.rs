use chrono::Utc;
use lectern_entity::enrollment::{self, ActiveModel, Entity as Enrollment};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::TryInsertResult;
use std::error::Error;

pub struct Mutation;

impl Mutation {
    /// Inserts the enrollment unless it already exists.
    ///
    /// Returns `true` if a new row was written.
    pub async fn create<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();
        let enrollment = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            enrolled_at: Set(now),
            last_accessed: Set(now),
        };
        let res = Enrollment::insert(enrollment)
            .on_conflict(
                OnConflict::columns([enrollment::Column::UserId, enrollment::Column::CourseId])
                    .do_nothing()
                    .clone(),
            )
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to create enrollment");
            })?;
        Ok(matches!(res, TryInsertResult::Inserted(_)))
    }

    /// Stamps the enrollment as accessed now. Returns `false` if the user is not enrolled.
    pub async fn touch<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Result<bool, DbErr> {
        let res = Enrollment::update_many()
            .col_expr(enrollment::Column::LastAccessed, Expr::value(Utc::now().naive_utc()))
            .filter(enrollment::Column::UserId.eq(user_id))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to update last access");
            })?;
        Ok(res.rows_affected > 0)
    }
}
