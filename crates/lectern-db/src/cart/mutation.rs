use chrono::Utc;
use lectern_entity::cart::{self, ActiveModel, Entity as Cart};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::TryInsertResult;
use sea_orm::sea_query::OnConflict;
use std::error::Error;

pub struct Mutation;

impl Mutation {
    /// Returns `true` if the item was not in the cart before.
    pub async fn insert<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Result<bool, DbErr> {
        let item = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            added_at: Set(Utc::now().naive_utc()),
        };
        let res = Cart::insert(item)
            .on_conflict(
                OnConflict::columns([cart::Column::UserId, cart::Column::CourseId])
                    .do_nothing()
                    .clone(),
            )
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to add cart item");
            })?;
        Ok(matches!(res, TryInsertResult::Inserted(_)))
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Result<u64, DbErr> {
        let res = Cart::delete_many()
            .filter(cart::Column::UserId.eq(user_id))
            .filter(cart::Column::CourseId.eq(course_id))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to delete cart item");
            })?;
        Ok(res.rows_affected)
    }
}
