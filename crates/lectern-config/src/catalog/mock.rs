//! Catalog views built from configuration instead of the database.

use crate::catalog::Catalog;
use crate::catalog::course::CourseConfig;
use lectern_model::course::{CourseDetail, CourseSummary, Instructor, Lesson, Section};
use lectern_model::price::Price;
use uuid::Uuid;

impl Catalog {
    /// Published courses as listed by the catalog endpoint, without ratings.
    #[must_use]
    pub fn course_summaries(&self) -> Vec<CourseSummary> {
        self.courses()
            .iter()
            .filter(|course| course.published)
            .filter_map(|course| self.summary(course))
            .collect()
    }

    #[must_use]
    pub fn course_detail(&self, course_id: Uuid) -> Option<CourseDetail> {
        let course = self.course(course_id).filter(|course| course.published)?;
        let summary = self.summary(course)?;
        let sections = (0..)
            .zip(&course.sections)
            .map(|(position, section)| Section {
                id: section.id,
                title: section.title.clone(),
                position,
                lessons: (0..)
                    .zip(&section.lessons)
                    .map(|(position, lesson)| Lesson {
                        id: lesson.id,
                        title: lesson.title.clone(),
                        duration_minutes: lesson.duration_minutes,
                        position,
                    })
                    .collect(),
            })
            .collect();

        Some(CourseDetail {
            summary,
            description: course.description.clone(),
            sections,
            reviews: Vec::new(),
        })
    }

    fn summary(&self, course: &CourseConfig) -> Option<CourseSummary> {
        let original_price = match course.original_price {
            Some(cents) => Some(Price::from_cents(cents).ok()?),
            None => None,
        };
        Some(CourseSummary {
            id: course.id,
            title: course.title.clone(),
            instructor: Instructor {
                id: course.instructor,
                name: self.instructor(course.instructor).map(|instructor| instructor.name.clone()),
            },
            price: Price::from_cents(course.price).ok()?,
            original_price,
            category: course.category.clone(),
            level: course.level.into(),
            duration_minutes: course.duration_minutes,
            published: course.published,
            average_rating: 0.0,
            review_count: 0,
        })
    }
}
