use lectern_entity::course::{self, Entity as Course, Level, Model};
use lectern_entity::user;
use sea_orm::prelude::*;
use sea_orm::{Condition, QueryOrder};
use std::error::Error;

pub struct Query;

/// Optional restrictions applied to the published catalog.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub category: Option<String>,
    pub level: Option<Level>,
    pub search: Option<String>,
}

impl CourseFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all().add(course::Column::Published.eq(true));
        if let Some(category) = &self.category {
            condition = condition.add(course::Column::Category.eq(category.as_str()));
        }
        if let Some(level) = self.level {
            condition = condition.add(course::Column::Level.eq(level));
        }
        if let Some(search) = self.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            condition = condition.add(course::Column::Title.contains(search));
        }
        condition
    }
}

impl Query {
    pub async fn published<C: ConnectionTrait>(
        conn: &C,
        filter: &CourseFilter,
    ) -> Result<Vec<(Model, Option<user::Model>)>, DbErr> {
        Course::find()
            .filter(filter.condition())
            .find_also_related(user::Entity)
            .order_by_desc(course::Column::CreatedAt)
            .order_by_asc(course::Column::Title)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, ?filter, "failed to load published courses");
            })
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Option<Model>, DbErr> {
        Course::find_by_id(course_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %course_id, "failed to load course");
        })
    }

    pub async fn find_with_instructor<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
    ) -> Result<Option<(Model, Option<user::Model>)>, DbErr> {
        Course::find_by_id(course_id)
            .find_also_related(user::Entity)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, "failed to load course with instructor");
            })
    }

    pub async fn for_instructor<C: ConnectionTrait>(conn: &C, instructor_id: Uuid) -> Result<Vec<Model>, DbErr> {
        Course::find()
            .filter(course::Column::InstructorId.eq(instructor_id))
            .order_by_desc(course::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %instructor_id, "failed to load instructor courses");
            })
    }
}
