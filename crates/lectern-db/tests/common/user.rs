use chrono::Utc;
use lectern_entity::user::{Entity as User, Model as UserModel, Role};
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel};
use uuid::Uuid;

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection) -> UserModel {
    create_test_user_with_role(db, Role::Student).await
}

#[allow(dead_code)]
pub async fn create_test_user_with_role(db: &DatabaseConnection, role: Role) -> UserModel {
    let user = UserModel {
        id: Uuid::new_v4(),
        name: Some("Test User".to_owned()),
        email: None,
        role,
        created_at: Utc::now().naive_utc(),
    };
    User::insert(user.clone().into_active_model()).exec(db).await.unwrap();
    user
}
