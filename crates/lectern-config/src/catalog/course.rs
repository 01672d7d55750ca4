use lectern_model::course::Level;
use schemars::JsonSchema;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<CourseLevel> for Level {
    fn from(value: CourseLevel) -> Self {
        match value {
            CourseLevel::Beginner => Level::Beginner,
            CourseLevel::Intermediate => Level::Intermediate,
            CourseLevel::Advanced => Level::Advanced,
        }
    }
}

#[derive(Debug, Deserialize, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct InstructorConfig {
    /// # The id of the instructor account.
    /// Created on startup if it does not exist yet.
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CourseConfig {
    pub id: Uuid,
    pub title: String,
    /// # The id of the instructor teaching the course.
    /// Must reference an instructor of the catalog.
    pub instructor: Uuid,
    /// # Price in the smallest currency unit.
    #[schemars(range(min = 0))]
    pub price: i64,
    /// # Price before discount.
    #[serde(default)]
    #[schemars(range(min = 0))]
    pub original_price: Option<i64>,
    pub category: String,
    pub level: CourseLevel,
    #[serde(default)]
    pub duration_minutes: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_published")]
    pub published: bool,
    /// # Curriculum in display order.
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SectionConfig {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<LessonConfig>,
}

#[derive(Debug, Deserialize, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LessonConfig {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub duration_minutes: i32,
}
