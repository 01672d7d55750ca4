use crate::price::Price;
use crate::rating::Rating;
use crate::review::Review;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
pub enum Level {
    #[serde(rename = "BEGINNER", alias = "beginner", alias = "Beginner")]
    Beginner,
    #[serde(rename = "INTERMEDIATE", alias = "intermediate", alias = "Intermediate")]
    Intermediate,
    #[serde(rename = "ADVANCED", alias = "advanced", alias = "Advanced")]
    Advanced,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseQuery {
    pub category: Option<String>,
    pub level: Option<Level>,
    /// Matches course titles
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Instructor {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
    pub instructor: Instructor,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub category: String,
    pub level: Level,
    pub duration_minutes: i32,
    pub published: bool,
    /// Zero when the course has no reviews
    pub average_rating: f64,
    pub review_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    pub duration_minutes: i32,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Section {
    pub id: Uuid,
    pub title: String,
    pub position: i32,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub summary: CourseSummary,
    pub description: String,
    pub sections: Vec<Section>,
    pub reviews: Vec<Review>,
}

/// Course fields as written by an instructor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewCourse {
    pub title: String,
    pub price: Price,
    #[serde(default)]
    pub original_price: Option<Price>,
    pub category: String,
    pub level: Level,
    pub duration_minutes: i32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub price: Option<Price>,
    /// `null` removes the original price
    #[serde(default, with = "double_option")]
    #[schema(value_type = Option<Price>)]
    pub original_price: Option<Option<Price>>,
    pub category: Option<String>,
    pub level: Option<Level>,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
}

/// Course as seen by its instructor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InstructorCourse {
    pub id: Uuid,
    pub title: String,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub category: String,
    pub level: Level,
    pub duration_minutes: i32,
    pub description: String,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewSection {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewLesson {
    pub title: String,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct Published {
    pub published: bool,
}

/// Mean of the given ratings, `0.0` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|rating| u32::from(rating.get())).sum();
    f64::from(sum) / ratings.len() as f64
}

mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T: Serialize, S: Serializer>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T: Deserialize<'de>, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Option<T>>, D::Error> {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(values: &[i64]) -> Vec<Rating> {
        values.iter().map(|v| Rating::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_average_rating() {
        assert!(average_rating(&[]).abs() < f64::EPSILON);
        assert!((average_rating(&ratings(&[4, 5])) - 4.5).abs() < f64::EPSILON);
        assert!((average_rating(&ratings(&[1, 2, 2])) - 5.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_course_update_original_price() {
        let update: CourseUpdate = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(update.original_price, None);
        let update: CourseUpdate = serde_json::from_str(r#"{"original_price":null}"#).unwrap();
        assert_eq!(update.original_price, Some(None));
        let update: CourseUpdate = serde_json::from_str(r#"{"original_price":500}"#).unwrap();
        assert_eq!(update.original_price, Some(Price::from_cents(500).ok()));
    }

    #[test]
    fn test_level_aliases() {
        let level: Level = serde_json::from_str(r#""beginner""#).unwrap();
        assert_eq!(level, Level::Beginner);
        let level: Level = serde_json::from_str(r#""ADVANCED""#).unwrap();
        assert_eq!(level, Level::Advanced);
    }
}
