use crate::convert::{FromDbModel, IntoDbModel, TryFromDbModel};
use crate::error::Error;
use lectern_entity::course::{Level as LevelModel, Model as CourseModel};
use lectern_entity::lesson::Model as LessonModel;
use lectern_entity::section::Model as SectionModel;
use lectern_entity::user::Model as UserModel;
use lectern_model::course::{CourseSummary, Instructor, InstructorCourse, Lesson, Level, Section, average_rating};
use lectern_model::price::Price;
use lectern_model::rating::Rating;

impl FromDbModel<LevelModel> for Level {
    fn from_db_model(model: LevelModel) -> Self {
        match model {
            LevelModel::Beginner => Self::Beginner,
            LevelModel::Intermediate => Self::Intermediate,
            LevelModel::Advanced => Self::Advanced,
        }
    }
}

impl IntoDbModel<LevelModel> for Level {
    fn into_db_model(self) -> LevelModel {
        match self {
            Self::Beginner => LevelModel::Beginner,
            Self::Intermediate => LevelModel::Intermediate,
            Self::Advanced => LevelModel::Advanced,
        }
    }
}

pub(crate) fn prices(model: &CourseModel) -> Result<(Price, Option<Price>), Error> {
    Ok((
        Price::from_cents(model.price_cents)?,
        model.original_price_cents.map(Price::from_cents).transpose()?,
    ))
}

/// Course with its instructor (if the user still exists) and the ratings of its reviews.
impl TryFromDbModel<(CourseModel, Option<UserModel>, Vec<Rating>)> for CourseSummary {
    type Error = Error;

    fn try_from_db_model(
        (model, instructor, ratings): (CourseModel, Option<UserModel>, Vec<Rating>),
    ) -> Result<Self, Self::Error> {
        let (price, original_price) = prices(&model)?;
        Ok(Self {
            id: model.id,
            title: model.title,
            instructor: Instructor {
                id: model.instructor_id,
                name: instructor.and_then(|instructor| instructor.name),
            },
            price,
            original_price,
            category: model.category,
            level: Level::from_db_model(model.level),
            duration_minutes: model.duration_minutes,
            published: model.published,
            average_rating: average_rating(&ratings),
            review_count: ratings.len() as u64,
        })
    }
}

impl TryFromDbModel<CourseModel> for InstructorCourse {
    type Error = Error;

    fn try_from_db_model(model: CourseModel) -> Result<Self, Self::Error> {
        let (price, original_price) = prices(&model)?;
        Ok(Self {
            id: model.id,
            title: model.title,
            price,
            original_price,
            category: model.category,
            level: Level::from_db_model(model.level),
            duration_minutes: model.duration_minutes,
            description: model.description,
            published: model.published,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl FromDbModel<LessonModel> for Lesson {
    fn from_db_model(model: LessonModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            duration_minutes: model.duration_minutes,
            position: model.position,
        }
    }
}

/// Section with its lessons in curriculum order.
impl FromDbModel<(SectionModel, Vec<LessonModel>)> for Section {
    fn from_db_model((model, lessons): (SectionModel, Vec<LessonModel>)) -> Self {
        Self {
            id: model.id,
            title: model.title,
            position: model.position,
            lessons: lessons.into_iter().map(Lesson::from_db_model).collect(),
        }
    }
}
