use lectern_entity::lesson::{self, Entity as Lesson, Model};
use lectern_entity::section;
use sea_orm::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect};
use std::error::Error;

pub struct Query;

impl Query {
    /// Lessons of a course in curriculum order (section position, then lesson position).
    pub async fn for_course<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Vec<Model>, DbErr> {
        Lesson::find()
            .inner_join(section::Entity)
            .filter(lesson::Column::CourseId.eq(course_id))
            .order_by_asc(section::Column::Position)
            .order_by_asc(lesson::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, "failed to load lessons");
            })
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, lesson_id: Uuid) -> Result<Option<Model>, DbErr> {
        Lesson::find_by_id(lesson_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %lesson_id, "failed to load lesson");
        })
    }

    pub async fn ids_for_course<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        Lesson::find()
            .select_only()
            .column(lesson::Column::Id)
            .filter(lesson::Column::CourseId.eq(course_id))
            .into_tuple()
            .all(conn)
            .await
    }

    pub async fn count_for_section<C: ConnectionTrait>(conn: &C, section_id: Uuid) -> Result<u64, DbErr> {
        Lesson::find()
            .filter(lesson::Column::SectionId.eq(section_id))
            .count(conn)
            .await
    }
}

