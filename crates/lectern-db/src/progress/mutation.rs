use chrono::Utc;
use lectern_entity::progress::{ActiveModel, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::prelude::*;
use std::error::Error;

pub struct Mutation;

fn completion_date(completed: bool) -> Option<DateTime> {
    completed.then(|| Utc::now().naive_utc())
}

impl Mutation {
    pub async fn insert<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        lesson_id: Uuid,
        completed: bool,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            user_id: Set(user_id),
            lesson_id: Set(lesson_id),
            completed: Set(completed),
            completion_date: Set(completion_date(completed)),
        }
        .insert(conn)
        .await
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, %lesson_id, "failed to insert progress");
        })
    }

    /// Sets the completed flag. The completion date follows the flag.
    pub async fn set_completed<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        lesson_id: Uuid,
        completed: bool,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            user_id: Unchanged(user_id),
            lesson_id: Unchanged(lesson_id),
            completed: Set(completed),
            completion_date: Set(completion_date(completed)),
        }
        .update(conn)
        .await
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, %lesson_id, "failed to update progress");
        })
    }
}
