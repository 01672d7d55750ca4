use lectern_entity::lesson;
use lectern_entity::progress::{self, Entity as Progress, Model};
use sea_orm::prelude::*;
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get<C: ConnectionTrait>(conn: &C, user_id: Uuid, lesson_id: Uuid) -> Result<Option<Model>, DbErr> {
        Progress::find_by_id((user_id, lesson_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %lesson_id, "failed to load progress");
            })
    }

    /// Completed progress rows of one user for lessons of the course.
    pub async fn completed_for_course<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Progress::find()
            .inner_join(lesson::Entity)
            .filter(progress::Column::UserId.eq(user_id))
            .filter(progress::Column::Completed.eq(true))
            .filter(lesson::Column::CourseId.eq(course_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to load course progress");
            })
    }

    /// Completed progress rows of every user for lessons of the course.
    pub async fn completed_for_course_all_users<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Progress::find()
            .inner_join(lesson::Entity)
            .filter(progress::Column::Completed.eq(true))
            .filter(lesson::Column::CourseId.eq(course_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, "failed to load progress of course");
            })
    }
}
