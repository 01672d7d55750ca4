use crate::util::{FlattenTransactionResultExt, RequireRecord};
use lectern_entity::{
    identity_mapping,
    identity_mapping::{ActiveModel, Entity, Model},
};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::{TransactionTrait, sea_query};

pub struct Mutation;

impl Mutation {
    /// Links `subject` to `user_id` unless the subject is already mapped.
    ///
    /// The returned mapping is the one stored in the database, so its `user_id` differs from the
    /// argument if another request mapped the subject first.
    pub async fn get_or_create<C: TransactionTrait>(conn: &C, user_id: Uuid, subject: String) -> Result<Model, DbErr> {
        let mapping = ActiveModel {
            user_id: Set(user_id),
            subject: Set(subject.clone()),
            ..Default::default()
        };

        conn.transaction(|txn| {
            Box::pin(async move {
                Entity::insert(mapping)
                    .on_conflict(
                        sea_query::OnConflict::column(identity_mapping::Column::Subject)
                            .do_nothing()
                            .clone(),
                    )
                    .do_nothing()
                    .exec(txn)
                    .await?;
                Entity::find()
                    .filter(identity_mapping::Column::Subject.eq(subject))
                    .one(txn)
                    .await
                    .require("identity mapping")
            })
        })
        .await
        .flatten_res()
    }
}
