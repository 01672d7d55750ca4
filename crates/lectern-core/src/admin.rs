use crate::error::CoreError;
use lectern_db::{course, user};
use lectern_model::course::InstructorCourse;
use lectern_model::user::{Role, User};
use lectern_model_tools::convert::{FromDbModel, IntoDbModel, TryFromDbModel};
use sea_orm::ConnectionTrait;
use uuid::Uuid;

pub async fn list_users<C: ConnectionTrait>(conn: &C) -> Result<Vec<User>, CoreError> {
    Ok(user::Query::all(conn).await?.into_iter().map(User::from_db_model).collect())
}

pub async fn change_role<C: ConnectionTrait>(conn: &C, user_id: Uuid, role: Role) -> Result<User, CoreError> {
    if user::Query::find_user_by_id(conn, user_id).await?.is_none() {
        return Err(CoreError::NotFound("user"));
    }
    let updated = user::Mutation::update_role(conn, user_id, role.into_db_model()).await?;
    tracing::info!(%user_id, %role, "user role changed");
    Ok(User::from_db_model(updated))
}

/// Publishes or hides any course regardless of its instructor.
pub async fn set_published<C: ConnectionTrait>(
    conn: &C,
    course_id: Uuid,
    published: bool,
) -> Result<InstructorCourse, CoreError> {
    if course::Query::find_by_id(conn, course_id).await?.is_none() {
        return Err(CoreError::NotFound("course"));
    }
    let updated = course::Mutation::set_published(conn, course_id, published).await?;
    tracing::info!(%course_id, published, "course visibility changed by admin");
    Ok(InstructorCourse::try_from_db_model(updated)?)
}
