use lectern_entity::access_tokens::{Column as AccessTokenColumn, Entity as AccessToken};
use lectern_entity::identity_mapping::{Column as IdentityColumn, Entity as IdentityMapping};
use lectern_entity::user::{self, Entity as UserEntity, Model as User};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_user_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<User>, DbErr> {
        UserEntity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error loading user");
        })
    }

    pub async fn find_by_token<C: ConnectionTrait>(conn: &C, token: &str) -> Result<Option<User>, DbErr> {
        UserEntity::find()
            .inner_join(AccessToken)
            .filter(AccessTokenColumn::AccessToken.eq(token))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error finding user by token");
            })
    }

    pub async fn find_by_subject<C: ConnectionTrait>(conn: &C, subject: &str) -> Result<Option<User>, DbErr> {
        UserEntity::find()
            .inner_join(IdentityMapping)
            .filter(IdentityColumn::Subject.eq(subject))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error finding user by subject");
            })
    }

    pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<User>, DbErr> {
        UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error listing users");
            })
    }
}
