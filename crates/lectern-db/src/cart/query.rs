use lectern_entity::cart::{self, Entity as Cart, Model};
use lectern_entity::course;
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Result<Option<Model>, DbErr> {
        Cart::find_by_id((user_id, course_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to load cart item");
            })
    }

    /// Cart items of the user with their courses, in the order they were added.
    pub async fn for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<(Model, Option<course::Model>)>, DbErr> {
        Cart::find()
            .filter(cart::Column::UserId.eq(user_id))
            .find_also_related(course::Entity)
            .order_by_asc(cart::Column::AddedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load cart");
            })
    }
}
