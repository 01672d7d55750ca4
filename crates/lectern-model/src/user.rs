use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
pub enum Role {
    #[default]
    #[serde(rename = "STUDENT", alias = "student", alias = "Student")]
    Student,
    #[serde(rename = "INSTRUCTOR", alias = "instructor", alias = "Instructor")]
    Instructor,
    #[serde(rename = "ADMIN", alias = "admin", alias = "Admin")]
    Admin,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct RoleUpdate {
    pub role: Role,
}
