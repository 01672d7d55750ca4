use chrono::Utc;
use lectern_config::catalog::Catalog;
use lectern_config::catalog::course::CourseConfig;
use lectern_db::util::FlattenTransactionResultExt;
use lectern_db::{course, lesson, section, user};
use lectern_entity::course::Model as CourseModel;
use lectern_entity::lesson::Model as LessonModel;
use lectern_entity::section::Model as SectionModel;
use lectern_entity::user::Role;
use lectern_model::course::Level;
use lectern_model_tools::convert::IntoDbModel;
use sea_orm::{ConnectionTrait, DbErr, TransactionTrait};
use std::error::Error;

fn course_model(course: &CourseConfig) -> CourseModel {
    let now = Utc::now().naive_utc();
    CourseModel {
        id: course.id,
        title: course.title.clone(),
        instructor_id: course.instructor,
        price_cents: course.price,
        original_price_cents: course.original_price,
        category: course.category.clone(),
        level: Level::from(course.level).into_db_model(),
        duration_minutes: course.duration_minutes,
        description: course.description.clone(),
        published: course.published,
        created_at: now,
        updated_at: now,
    }
}

async fn seed_course<C: ConnectionTrait>(conn: &C, course: &CourseConfig) -> Result<(), DbErr> {
    course::Mutation::upsert(conn, course_model(course)).await?;
    for (section_position, section) in (0..).zip(&course.sections) {
        section::Mutation::upsert(
            conn,
            SectionModel {
                id: section.id,
                course_id: course.id,
                title: section.title.clone(),
                position: section_position,
            },
        )
        .await?;
        for (lesson_position, lesson) in (0..).zip(&section.lessons) {
            lesson::Mutation::upsert(
                conn,
                LessonModel {
                    id: lesson.id,
                    section_id: section.id,
                    course_id: course.id,
                    title: lesson.title.clone(),
                    duration_minutes: lesson.duration_minutes,
                    position: lesson_position,
                },
            )
            .await?;
        }
    }
    Ok(())
}

/// Writes the instructors and courses of the catalog into the database.
///
/// Existing instructor accounts are kept. Courses, sections and lessons are overwritten with the
/// catalog values, positions follow the order in the catalog.
pub(crate) async fn seed<C: TransactionTrait>(conn: &C, catalog: &Catalog) -> Result<(), DbErr> {
    let catalog = catalog.clone();
    conn.transaction::<_, _, DbErr>(|txn| {
        Box::pin(async move {
            for instructor in catalog.instructors() {
                user::Mutation::ensure_user(
                    txn,
                    instructor.id,
                    Some(instructor.name.clone()),
                    instructor.email.clone(),
                    Role::Instructor,
                )
                .await?;
            }
            for course in catalog.courses() {
                seed_course(txn, course).await?;
            }
            tracing::info!(
                instructors = catalog.instructors().len(),
                courses = catalog.courses().len(),
                "catalog seeded"
            );
            Ok(())
        })
    })
    .await
    .flatten_res()
    .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to seed catalog"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_core::catalog::{course_detail, list_published_courses};
    use lectern_db::course::CourseFilter;
    use lectern_entity::{course as course_entity, lesson as lesson_entity, section as section_entity};
    use lectern_test_helpers::memory_db;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_log::test;
    use uuid::Uuid;

    #[test(tokio::test)]
    async fn test_seed_bundled_catalog() {
        let db = memory_db().await.unwrap();
        let catalog = Catalog::bundled().unwrap();

        // Seeding is repeated on every start
        seed(&db, &catalog).await.unwrap();
        seed(&db, &catalog).await.unwrap();

        assert_eq!(course_entity::Entity::find().count(&db).await.unwrap(), 3);
        assert_eq!(section_entity::Entity::find().count(&db).await.unwrap(), 5);
        assert_eq!(lesson_entity::Entity::find().count(&db).await.unwrap(), 9);

        let published = list_published_courses(&db, &CourseFilter::default()).await;
        assert_eq!(published.len(), 2);
        assert!(published.iter().all(|course| course.instructor.name.is_some()));
    }

    #[test(tokio::test)]
    async fn test_seed_keeps_catalog_order() {
        let db = memory_db().await.unwrap();
        seed(&db, &Catalog::bundled().unwrap()).await.unwrap();

        let course_id = Uuid::parse_str("5a9d2c41-7b3e-4f10-8c6d-2e1f0a9b8c01").unwrap();
        let detail = course_detail(&db, course_id).await.unwrap();
        let sections: Vec<_> = detail.sections.iter().map(|section| section.title.as_str()).collect();
        assert_eq!(sections, ["Getting Started", "Ownership"]);
        let lessons: Vec<_> = detail.sections[1].lessons.iter().map(|lesson| lesson.position).collect();
        assert_eq!(lessons, [0, 1, 2]);
        assert_eq!(detail.summary.price.cents(), 4999);
    }
}
