use crate::catalog::course::{CourseConfig, InstructorConfig};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Default, Deserialize, Clone, Debug, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CatalogV01 {
    #[serde(default)]
    /// # Instructor accounts owning the courses
    pub(crate) instructors: Vec<InstructorConfig>,
    #[serde(default)]
    /// # Courses with their curriculum
    pub(crate) courses: Vec<CourseConfig>,
}
