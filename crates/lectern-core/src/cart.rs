use crate::enrollment::{EnrollOutcome, enroll};
use crate::error::CoreError;
use lectern_db::{cart, course, enrollment};
use lectern_model::cart::{Cart, CartItem, Checkout};
use lectern_model_tools::convert::TryFromDbModel;
use sea_orm::ConnectionTrait;
use std::error::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    Added,
    AlreadyInCart,
    AlreadyEnrolled,
    /// The course does not exist or is not published.
    CourseUnavailable,
    Failed,
}

impl CartOutcome {
    #[must_use]
    pub fn succeeded(self) -> bool {
        matches!(self, Self::Added | Self::AlreadyInCart)
    }
}

pub async fn add_to_cart<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> CartOutcome {
    try_add_to_cart(conn, user_id, course_id).await.unwrap_or_else(|error| {
        tracing::error!(error = &error as &dyn Error, %user_id, %course_id, "failed to add course to cart");
        CartOutcome::Failed
    })
}

async fn try_add_to_cart<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> Result<CartOutcome, CoreError> {
    if enrollment::Query::is_enrolled(conn, user_id, course_id).await? {
        // Leftover from an enrollment whose cart cleanup failed.
        if let Err(error) = cart::Mutation::delete(conn, user_id, course_id).await {
            tracing::warn!(error = &error as &dyn Error, %user_id, %course_id, "failed to drop cart row of enrolled course");
        }
        return Ok(CartOutcome::AlreadyEnrolled);
    }
    if cart::Query::get(conn, user_id, course_id).await?.is_some() {
        return Ok(CartOutcome::AlreadyInCart);
    }
    match course::Query::find_by_id(conn, course_id).await? {
        Some(course) if course.published => {}
        _ => return Ok(CartOutcome::CourseUnavailable),
    }

    if cart::Mutation::insert(conn, user_id, course_id).await? {
        Ok(CartOutcome::Added)
    } else {
        Ok(CartOutcome::AlreadyInCart)
    }
}

/// Removes a course from the cart. Removing a course that is not in the cart succeeds.
pub async fn remove_from_cart<C: ConnectionTrait>(conn: &C, user_id: Uuid, course_id: Uuid) -> bool {
    cart::Mutation::delete(conn, user_id, course_id).await.is_ok()
}

pub async fn cart<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Cart {
    load_cart(conn, user_id).await.unwrap_or_else(|error| {
        tracing::error!(error = &error as &dyn Error, %user_id, "failed to load cart");
        Cart::new(Vec::new())
    })
}

async fn load_cart<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Cart, CoreError> {
    let mut items = Vec::new();
    for (item, course) in cart::Query::for_user(conn, user_id).await? {
        let Some(course) = course else {
            continue;
        };
        items.push(CartItem::try_from_db_model((item, course))?);
    }
    Ok(Cart::new(items))
}

/// Enrolls the user in every course of the cart.
///
/// Courses that fail to enroll stay in the cart. Returns `None` if the cart could not be loaded.
pub async fn checkout<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Option<Checkout> {
    let items = cart::Query::for_user(conn, user_id).await.ok()?;

    let mut checkout = Checkout {
        enrolled: Vec::new(),
        failed: Vec::new(),
    };
    for (item, _) in items {
        match enroll(conn, user_id, item.course_id).await {
            EnrollOutcome::Enrolled => checkout.enrolled.push(item.course_id),
            EnrollOutcome::AlreadyEnrolled => {
                // Leftover from before the enrollment existed
                remove_from_cart(conn, user_id, item.course_id).await;
                checkout.enrolled.push(item.course_id);
            }
            EnrollOutcome::CourseUnavailable | EnrollOutcome::Failed => checkout.failed.push(item.course_id),
        }
    }

    tracing::info!(%user_id, enrolled = checkout.enrolled.len(), failed = checkout.failed.len(), "checkout finished");
    Some(checkout)
}
