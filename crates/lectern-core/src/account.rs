use crate::error::CoreError;
use lectern_db::util::FlattenTransactionResultExt;
use lectern_db::{access_tokens, identity_mapping, user};
use lectern_entity::access_tokens::Model as AccessToken;
use lectern_entity::user::{ActiveModel as UserActiveModel, Model as UserModel, Role};
use lectern_model::user::User;
use lectern_model_tools::convert::FromDbModel;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::prelude::*;
use sea_orm::{TransactionError, TransactionTrait};
use thiserror::Error;

/// Claims of a validated identity token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Error)]
enum UserCreationError {
    #[error(transparent)]
    DbErr(#[from] DbErr),

    #[error("User exists")]
    UserExists { user_id: Uuid },
}

/// Returns the id of the user mapped to `identity`, creating a student account on first login.
async fn user_id_for<C: ConnectionTrait + TransactionTrait>(conn: &C, identity: &Identity) -> Result<Uuid, DbErr> {
    if let Some(user) = user::Query::find_by_subject(conn, &identity.subject).await? {
        return Ok(user.id);
    }

    let identity = identity.clone();
    let res = conn
        .transaction(|txn| {
            Box::pin(async move {
                let user = user::Mutation::create_user(txn, identity.name, identity.email, Role::Student).await?;
                let mapping = identity_mapping::Mutation::get_or_create(txn, user.id, identity.subject).await?;
                if user.id == mapping.user_id {
                    Result::<_, UserCreationError>::Ok(user.id)
                } else {
                    Err(UserCreationError::UserExists {
                        user_id: mapping.user_id,
                    })
                }
            })
        })
        .await;
    match res {
        Ok(user_id) => {
            tracing::info!(%user_id, "created user");
            Ok(user_id)
        }
        // A concurrent login mapped the subject first, our user was rolled back
        Err(TransactionError::Transaction(UserCreationError::UserExists { user_id })) => Ok(user_id),
        Err(TransactionError::Connection(error) | TransactionError::Transaction(UserCreationError::DbErr(error))) => {
            Err(error)
        }
    }
}

/// Keeps name and email in sync with the identity provider.
async fn refresh_profile<C: ConnectionTrait>(conn: &C, user: UserModel, identity: &Identity) -> Result<UserModel, DbErr> {
    let name = identity.name.clone().or_else(|| user.name.clone());
    let email = identity.email.clone().or_else(|| user.email.clone());
    if name == user.name && email == user.email {
        return Ok(user);
    }
    user::Mutation::update_user(
        conn,
        UserActiveModel {
            id: Unchanged(user.id),
            name: Set(name),
            email: Set(email),
            ..Default::default()
        },
    )
    .await
}

/// Maps the identity to a user and hands out the user's access token.
pub async fn login<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    identity: Identity,
) -> Result<(User, AccessToken), CoreError> {
    let res = conn
        .transaction(|txn| {
            Box::pin(async move {
                let user_id = user_id_for(txn, &identity).await?;
                let user = user::Query::find_user_by_id(txn, user_id)
                    .await?
                    .ok_or_else(|| DbErr::RecordNotFound("user not found after login".to_owned()))?;
                let user = refresh_profile(txn, user, &identity).await?;
                let token = access_tokens::Mutation::get_or_create(txn, user_id).await?;
                Ok::<_, DbErr>((user, token))
            })
        })
        .await
        .flatten_res()?;
    let (user, token) = res;
    Ok((User::from_db_model(user), token))
}

/// Invalidates the access token of the user. Returns `false` if there was none.
pub async fn logout<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<bool, CoreError> {
    Ok(access_tokens::Mutation::delete(conn, user_id).await? > 0)
}

/// The user owning the access token.
pub async fn user_by_token<C: ConnectionTrait>(conn: &C, token: &str) -> Result<Option<User>, CoreError> {
    Ok(user::Query::find_by_token(conn, token).await?.map(User::from_db_model))
}
