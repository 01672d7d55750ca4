use lectern_entity::enrollment::{self, Entity as Enrollment, Model};
use lectern_entity::course;
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Result<Option<Model>, DbErr> {
        Enrollment::find_by_id((user_id, course_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to load enrollment");
            })
    }

    pub async fn is_enrolled<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Result<bool, DbErr> {
        Ok(Self::get(conn, user_id, course_id).await?.is_some())
    }

    /// Enrollments of a user with their courses, most recently accessed first.
    pub async fn for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<(Model, Option<course::Model>)>, DbErr> {
        Enrollment::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .find_also_related(course::Entity)
            .order_by_desc(enrollment::Column::LastAccessed)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load enrollments");
            })
    }

    pub async fn for_course<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Vec<Model>, DbErr> {
        Enrollment::find()
            .filter(enrollment::Column::CourseId.eq(course_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, "failed to load course enrollments");
            })
    }
}
