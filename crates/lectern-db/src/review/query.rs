use lectern_entity::review::{self, Entity as Review, Model};
use lectern_entity::user;
use sea_orm::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Result<Option<Model>, DbErr> {
        Review::find_by_id((user_id, course_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to load review");
            })
    }

    /// Reviews of a course with their authors, newest first.
    pub async fn for_course<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
    ) -> Result<Vec<(Model, Option<user::Model>)>, DbErr> {
        Review::find()
            .filter(review::Column::CourseId.eq(course_id))
            .find_also_related(user::Entity)
            .order_by_desc(review::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, "failed to load reviews");
            })
    }

    /// `(course_id, rating)` pairs for every review of the given courses.
    pub async fn ratings_for_courses<C: ConnectionTrait>(
        conn: &C,
        course_ids: Vec<Uuid>,
    ) -> Result<Vec<(Uuid, i16)>, DbErr> {
        Review::find()
            .select_only()
            .column(review::Column::CourseId)
            .column(review::Column::Rating)
            .filter(review::Column::CourseId.is_in(course_ids))
            .into_tuple()
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load ratings");
            })
    }
}
