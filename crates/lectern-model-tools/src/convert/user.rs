use crate::convert::{FromDbModel, IntoDbModel};
use lectern_entity::user::Model as UserModel;
use lectern_entity::user::Role as RoleModel;
use lectern_model::user::{Role, User};

impl FromDbModel<RoleModel> for Role {
    fn from_db_model(model: RoleModel) -> Self {
        match model {
            RoleModel::Student => Self::Student,
            RoleModel::Instructor => Self::Instructor,
            RoleModel::Admin => Self::Admin,
        }
    }
}

impl IntoDbModel<RoleModel> for Role {
    fn into_db_model(self) -> RoleModel {
        match self {
            Self::Student => RoleModel::Student,
            Self::Instructor => RoleModel::Instructor,
            Self::Admin => RoleModel::Admin,
        }
    }
}

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role: Role::from_db_model(model.role),
        }
    }
}
