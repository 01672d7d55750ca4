pub mod access_tokens;
pub mod cart;
pub mod course;
pub mod enrollment;
pub mod identity_mapping;
pub mod lesson;
pub mod progress;
pub mod review;
pub mod section;
pub mod user;
