use crate::convert::TryFromDbModel;
use crate::error::Error;
use lectern_entity::review::Model as ReviewModel;
use lectern_entity::user::Model as UserModel;
use lectern_model::rating::Rating;
use lectern_model::review::Review;

impl TryFromDbModel<(ReviewModel, Option<UserModel>)> for Review {
    type Error = Error;

    fn try_from_db_model((model, user): (ReviewModel, Option<UserModel>)) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: model.user_id,
            user_name: user.and_then(|user| user.name),
            rating: Rating::new(i64::from(model.rating))?,
            comment: model.comment,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
