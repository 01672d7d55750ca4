use chrono::Utc;
use lectern_entity::user::{ActiveModel, Entity, Model, Role};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_user<C: ConnectionTrait>(
        conn: &C,
        name: Option<String>,
        email: Option<String>,
        role: Role,
    ) -> Result<Model, DbErr> {
        let new_user = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            email: Set(email),
            role: Set(role),
            created_at: Set(Utc::now().naive_utc()),
        };

        new_user.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create user");
        })
    }

    /// Inserts a user with a fixed id, leaving an existing row untouched.
    pub async fn ensure_user<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        role: Role,
    ) -> Result<(), DbErr> {
        let user = ActiveModel {
            id: Set(id),
            name: Set(name),
            email: Set(email),
            role: Set(role),
            created_at: Set(Utc::now().naive_utc()),
        };
        Entity::insert(user)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(lectern_entity::user::Column::Id)
                    .do_nothing()
                    .clone(),
            )
            .do_nothing()
            .exec(conn)
            .await?;
        Ok(())
    }

    pub async fn update_user<C: ConnectionTrait>(conn: &C, user: ActiveModel) -> Result<Model, DbErr> {
        user.update(conn).await
    }

    pub async fn update_role<C: ConnectionTrait>(conn: &C, user_id: Uuid, role: Role) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: Unchanged(user_id),
            role: Set(role),
            ..Default::default()
        };
        user.update(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, "failed to update user role");
        })
    }
}
