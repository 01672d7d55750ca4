use lectern_entity::section::{self, Entity as Section, Model};
use sea_orm::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn for_course<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Vec<Model>, DbErr> {
        Section::find()
            .filter(section::Column::CourseId.eq(course_id))
            .order_by_asc(section::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, "failed to load sections");
            })
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, section_id: Uuid) -> Result<Option<Model>, DbErr> {
        Section::find_by_id(section_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %section_id, "failed to load section");
        })
    }

    pub async fn count_for_course<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<u64, DbErr> {
        Section::find()
            .filter(section::Column::CourseId.eq(course_id))
            .count(conn)
            .await
    }
}
