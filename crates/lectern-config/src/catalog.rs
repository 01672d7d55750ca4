use crate::catalog::course::{CourseConfig, InstructorConfig};
use crate::catalog::error::CatalogError;
use crate::catalog::v01::catalog::CatalogV01;
use futures::StreamExt;
use lectern_utils::loader::{Filter, Loader, LoaderTrait};
use schemars::JsonSchema;
use serde::Deserialize;
use std::collections::HashSet;
use uuid::Uuid;

pub mod course;
pub mod error;
pub mod mock;
pub mod v01;

const BUNDLED_CATALOG: &str = include_str!("../catalog/default.yaml");

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
#[serde(tag = "version")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { lectern: CatalogV01 },
}

/// Instructors and courses seeded into the database on startup.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    instructors: Vec<InstructorConfig>,
    courses: Vec<CourseConfig>,
}

impl From<CatalogV01> for Catalog {
    fn from(value: CatalogV01) -> Self {
        Self {
            instructors: value.instructors,
            courses: value.courses,
        }
    }
}

impl Catalog {
    /// Parses and validates a single catalog document.
    pub fn parse(content: &[u8]) -> Result<Self, CatalogError> {
        let VersionConfig::V01 { lectern } = serde_yml::from_slice::<VersionConfig>(content)?;
        let catalog = Self::from(lectern);
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the binaries. Also serves as mock data for clients.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::parse(BUNDLED_CATALOG.as_bytes())
    }

    #[must_use]
    pub fn instructors(&self) -> &[InstructorConfig] {
        &self.instructors
    }

    #[must_use]
    pub fn courses(&self) -> &[CourseConfig] {
        &self.courses
    }

    #[must_use]
    pub fn course(&self, course_id: Uuid) -> Option<&CourseConfig> {
        self.courses.iter().find(|course| course.id == course_id)
    }

    #[must_use]
    pub fn instructor(&self, instructor_id: Uuid) -> Option<&InstructorConfig> {
        self.instructors.iter().find(|instructor| instructor.id == instructor_id)
    }

    fn extend(&mut self, other: Catalog) {
        self.instructors.extend(other.instructors);
        self.courses.extend(other.courses);
    }

    /// Ids are unique across all entries and every course references a known instructor.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        let mut check_id = |id: Uuid| {
            if ids.insert(id) {
                Ok(())
            } else {
                Err(CatalogError::DuplicateId(id))
            }
        };

        for instructor in &self.instructors {
            check_id(instructor.id)?;
        }
        for course in &self.courses {
            check_id(course.id)?;
            check_title(course.id, &course.title)?;
            if self.instructor(course.instructor).is_none() {
                return Err(CatalogError::UnknownInstructor {
                    course: course.id,
                    instructor: course.instructor,
                });
            }
            if course.price < 0 || course.original_price.is_some_and(|price| price < 0) {
                return Err(CatalogError::NegativePrice(course.id));
            }
            for section in &course.sections {
                check_id(section.id)?;
                check_title(section.id, &section.title)?;
                for lesson in &section.lessons {
                    check_id(lesson.id)?;
                    check_title(lesson.id, &lesson.title)?;
                }
            }
        }
        Ok(())
    }
}

fn check_title(id: Uuid, title: &str) -> Result<(), CatalogError> {
    if title.trim().is_empty() {
        return Err(CatalogError::EmptyTitle(id));
    }
    Ok(())
}

/// Loads every YAML file below the loader root into one catalog.
pub async fn load(loader: Loader) -> Result<Catalog, CatalogError> {
    tracing::debug!("loading catalog");
    let mut stream = loader.load_dir("", Filter::Yaml);
    let mut catalog = Catalog::default();
    while let Some(file) = stream.next().await {
        let file = file?;
        tracing::debug!(key = %file.key, hash = %file.hash, "parsing catalog file");
        let VersionConfig::V01 { lectern } = serde_yml::from_slice::<VersionConfig>(&file.content)?;
        catalog.extend(lectern.into());
    }
    catalog.validate()?;
    tracing::info!(
        instructors = catalog.instructors.len(),
        courses = catalog.courses.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_utils::loader::file_system::FileSystemLoader;
    use test_log::test;

    const INSTRUCTOR: &str = "7d6c5c0e-8a52-4a2e-9a39-3f7f3d0c0a01";

    fn course_yaml(course_id: &str, instructor_id: &str) -> String {
        format!(
            r#"
version: "0.1"
lectern:
  courses:
    - id: {course_id}
      title: Testing in Rust
      instructor: {instructor_id}
      price: 1999
      category: Programming
      level: beginner
"#
        )
    }

    #[test]
    fn test_bundled_catalog() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.instructors().is_empty());
        assert!(!catalog.courses().is_empty());
        let course = &catalog.courses()[0];
        assert_eq!(catalog.course(course.id).unwrap().title, course.title);
        assert!(catalog.instructor(course.instructor).is_some());
    }

    #[test]
    fn test_unknown_instructor() {
        let yaml = course_yaml("4c1b1f7e-0a2b-4c3d-8e9f-0a1b2c3d4e5f", INSTRUCTOR);
        let res = Catalog::parse(yaml.as_bytes());
        assert!(matches!(res, Err(CatalogError::UnknownInstructor { .. })));
    }

    #[test]
    fn test_unknown_version() {
        let res = Catalog::parse(b"version: \"0.2\"\nlectern: {}\n");
        assert!(matches!(res, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_duplicate_id() {
        let yaml = format!(
            r#"
version: "0.1"
lectern:
  instructors:
    - id: {INSTRUCTOR}
      name: Ada
  courses:
    - id: {INSTRUCTOR}
      title: Clash
      instructor: {INSTRUCTOR}
      price: 0
      category: Programming
      level: advanced
"#
        );
        let res = Catalog::parse(yaml.as_bytes());
        assert!(matches!(res, Err(CatalogError::DuplicateId(id)) if id.to_string() == INSTRUCTOR));
    }

    #[test(tokio::test)]
    async fn test_load_merges_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("instructors.yaml"),
            format!("version: \"0.1\"\nlectern:\n  instructors:\n    - id: {INSTRUCTOR}\n      name: Ada\n"),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("courses.yml"),
            course_yaml("4c1b1f7e-0a2b-4c3d-8e9f-0a1b2c3d4e5f", INSTRUCTOR),
        )
        .unwrap();

        let loader = Loader::FileSystem(FileSystemLoader::new(dir.path().to_path_buf()));
        let catalog = load(loader).await.unwrap();
        assert_eq!(catalog.instructors().len(), 1);
        assert_eq!(catalog.courses().len(), 1);
        assert!(catalog.courses()[0].published);
        assert!(catalog.courses()[0].sections.is_empty());
    }
}
