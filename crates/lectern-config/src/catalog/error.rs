use lectern_utils::loader::error::LoadingError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Loading(#[from] LoadingError),

    #[error(transparent)]
    ParseError(#[from] serde_yml::Error),

    #[error("Duplicate id in catalog: {0}")]
    DuplicateId(Uuid),

    #[error("Course {course} references unknown instructor {instructor}")]
    UnknownInstructor { course: Uuid, instructor: Uuid },

    #[error("Course {0} has a negative price")]
    NegativePrice(Uuid),

    #[error("Catalog entry {0} has an empty title")]
    EmptyTitle(Uuid),
}
