use chrono::Utc;
use lectern_entity::review::{ActiveModel, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::prelude::*;
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn insert<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
        rating: i16,
        comment: String,
    ) -> Result<Model, DbErr> {
        let now = Utc::now().naive_utc();
        ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            rating: Set(rating),
            comment: Set(comment),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(conn)
        .await
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to insert review");
        })
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
        rating: i16,
        comment: String,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            user_id: Unchanged(user_id),
            course_id: Unchanged(course_id),
            rating: Set(rating),
            comment: Set(comment),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .update(conn)
        .await
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to update review");
        })
    }
}
