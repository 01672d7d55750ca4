use lectern_entity::lesson::{self, ActiveModel, Entity as Lesson, Model};
use lectern_entity::section;
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::TransactionTrait;
use sea_orm::sea_query::OnConflict;
use std::error::Error;

use crate::util::FlattenTransactionResultExt;

pub struct Mutation;

impl Mutation {
    /// Adds a lesson after the existing lessons of the section.
    pub async fn append<C: TransactionTrait>(
        conn: &C,
        section: &section::Model,
        title: String,
        duration_minutes: i32,
    ) -> Result<Model, DbErr> {
        let section_id = section.id;
        let course_id = section.course_id;
        conn.transaction(|txn| {
            Box::pin(async move {
                let position = super::Query::count_for_section(txn, section_id).await?;
                let position = i32::try_from(position).map_err(|_| DbErr::Custom("too many lessons".to_owned()))?;
                ActiveModel {
                    id: Set(Uuid::new_v4()),
                    section_id: Set(section_id),
                    course_id: Set(course_id),
                    title: Set(title),
                    duration_minutes: Set(duration_minutes),
                    position: Set(position),
                }
                .insert(txn)
                .await
            })
        })
        .await
        .flatten_res()
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %section_id, "failed to append lesson");
        })
    }

    pub async fn upsert<C: ConnectionTrait>(conn: &C, lesson: Model) -> Result<(), DbErr> {
        Lesson::insert(ActiveModel::from(lesson))
            .on_conflict(
                OnConflict::column(lesson::Column::Id)
                    .update_columns([
                        lesson::Column::SectionId,
                        lesson::Column::CourseId,
                        lesson::Column::Title,
                        lesson::Column::DurationMinutes,
                        lesson::Column::Position,
                    ])
                    .clone(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }
}
