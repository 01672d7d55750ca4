use lectern_entity::section::{self, ActiveModel, Entity as Section, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::TransactionTrait;
use std::error::Error;

use crate::util::FlattenTransactionResultExt;

pub struct Mutation;

impl Mutation {
    /// Adds a section after the existing sections of the course.
    pub async fn append<C: TransactionTrait>(conn: &C, course_id: Uuid, title: String) -> Result<Model, DbErr> {
        conn.transaction(|txn| {
            Box::pin(async move {
                let position = super::Query::count_for_course(txn, course_id).await?;
                let position = i32::try_from(position).map_err(|_| DbErr::Custom("too many sections".to_owned()))?;
                ActiveModel {
                    id: Set(Uuid::new_v4()),
                    course_id: Set(course_id),
                    title: Set(title),
                    position: Set(position),
                }
                .insert(txn)
                .await
            })
        })
        .await
        .flatten_res()
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %course_id, "failed to append section");
        })
    }

    pub async fn upsert<C: ConnectionTrait>(conn: &C, section: Model) -> Result<(), DbErr> {
        Section::insert(ActiveModel::from(section))
            .on_conflict(
                OnConflict::column(section::Column::Id)
                    .update_columns([section::Column::CourseId, section::Column::Title, section::Column::Position])
                    .clone(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }
}
