use crate::convert::TryFromDbModel;
use crate::convert::course::prices;
use crate::error::Error;
use lectern_entity::cart::Model as CartModel;
use lectern_entity::course::Model as CourseModel;
use lectern_model::cart::CartItem;

impl TryFromDbModel<(CartModel, CourseModel)> for CartItem {
    type Error = Error;

    fn try_from_db_model((item, course): (CartModel, CourseModel)) -> Result<Self, Self::Error> {
        let (price, original_price) = prices(&course)?;
        Ok(Self {
            course_id: course.id,
            title: course.title,
            price,
            original_price,
            added_at: item.added_at,
        })
    }
}
