use crate::convert::FromDbModel;
use daybook_entity::user::Model as UserModel;
use daybook_model::user::User;

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
        }
    }
}
