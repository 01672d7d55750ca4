use crate::util::{FlattenTransactionResultExt, RequireRecord};
use base64::Engine;
use chrono::Utc;
use lectern_entity::{
    access_tokens,
    access_tokens::{ActiveModel, Entity, Model},
};
use ring::rand::{self, SecureRandom};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::{TransactionTrait, sea_query};

const TOKEN_BYTES: usize = 64;

pub struct Mutation;

fn generate_token() -> Result<String, DbErr> {
    let rng = rand::SystemRandom::new();
    let mut bytes = [0u8; TOKEN_BYTES];
    // Only fails if the OS entropy source is unavailable
    rng.fill(&mut bytes)
        .map_err(|_| DbErr::Custom("failed to generate random bytes".to_owned()))?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

impl Mutation {
    /// Returns the existing token of the user or creates one.
    pub async fn get_or_create<C: TransactionTrait>(conn: &C, user_id: Uuid) -> Result<Model, DbErr> {
        let token = ActiveModel {
            user_id: Set(user_id),
            access_token: Set(generate_token()?),
            issued_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        conn.transaction(|txn| {
            Box::pin(async move {
                Entity::insert(token)
                    .on_conflict(
                        sea_query::OnConflict::column(access_tokens::Column::UserId)
                            .do_nothing()
                            .clone(),
                    )
                    .do_nothing()
                    .exec(txn)
                    .await?;
                Entity::find()
                    .filter(access_tokens::Column::UserId.eq(user_id))
                    .one(txn)
                    .await
                    .require("access token")
            })
        })
        .await
        .flatten_res()
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<u64, DbErr> {
        let res = Entity::delete_many()
            .filter(access_tokens::Column::UserId.eq(user_id))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }
}
