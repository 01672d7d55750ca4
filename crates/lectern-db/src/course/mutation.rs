use chrono::Utc;
use lectern_entity::course::{self, ActiveModel, Entity as Course, Level, Model};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use std::error::Error;

pub struct Mutation;

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub price_cents: i64,
    pub original_price_cents: Option<i64>,
    pub category: String,
    pub level: Level,
    pub duration_minutes: i32,
    pub description: String,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub price_cents: Option<i64>,
    pub original_price_cents: Option<Option<i64>>,
    pub category: Option<String>,
    pub level: Option<Level>,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
}

fn set_or_keep<T: Into<sea_orm::Value>>(value: Option<T>) -> sea_orm::ActiveValue<T> {
    value.map_or(NotSet, Set)
}

impl Mutation {
    /// New courses start unpublished.
    pub async fn create<C: ConnectionTrait>(conn: &C, instructor_id: Uuid, course: NewCourse) -> Result<Model, DbErr> {
        let now = Utc::now().naive_utc();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(course.title),
            instructor_id: Set(instructor_id),
            price_cents: Set(course.price_cents),
            original_price_cents: Set(course.original_price_cents),
            category: Set(course.category),
            level: Set(course.level),
            duration_minutes: Set(course.duration_minutes),
            description: Set(course.description),
            published: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };
        model.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %instructor_id, "failed to create course");
        })
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, course_id: Uuid, changes: CourseChanges) -> Result<Model, DbErr> {
        let model = ActiveModel {
            id: Unchanged(course_id),
            title: set_or_keep(changes.title),
            price_cents: set_or_keep(changes.price_cents),
            original_price_cents: set_or_keep(changes.original_price_cents),
            category: set_or_keep(changes.category),
            level: set_or_keep(changes.level),
            duration_minutes: set_or_keep(changes.duration_minutes),
            description: set_or_keep(changes.description),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        model.update(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %course_id, "failed to update course");
        })
    }

    pub async fn set_published<C: ConnectionTrait>(conn: &C, course_id: Uuid, published: bool) -> Result<Model, DbErr> {
        let model = ActiveModel {
            id: Unchanged(course_id),
            published: Set(published),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        model.update(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %course_id, published, "failed to set published flag");
        })
    }

    /// Inserts the course or overwrites its catalog fields, keeping `created_at`.
    pub async fn upsert<C: ConnectionTrait>(conn: &C, course: Model) -> Result<(), DbErr> {
        let course_id = course.id;
        let model = ActiveModel::from(course);
        Course::insert(model)
            .on_conflict(
                OnConflict::column(course::Column::Id)
                    .update_columns([
                        course::Column::Title,
                        course::Column::InstructorId,
                        course::Column::PriceCents,
                        course::Column::OriginalPriceCents,
                        course::Column::Category,
                        course::Column::Level,
                        course::Column::DurationMinutes,
                        course::Column::Description,
                        course::Column::Published,
                        course::Column::UpdatedAt,
                    ])
                    .clone(),
            )
            .exec_without_returning(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, "failed to upsert course");
            })?;
        Ok(())
    }
}
