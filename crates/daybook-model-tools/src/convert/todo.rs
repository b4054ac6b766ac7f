use crate::convert::{FromDbModel, FromModel};
use daybook_entity::todo::{ActiveModel, Model as TodoModel};
use daybook_model::todo::{Todo, TodoChanges};
use sea_orm::ActiveValue;

impl FromDbModel<TodoModel> for Todo {
    fn from_db_model(model: TodoModel) -> Self {
        Self {
            id: model.id,
            user: model.user_id,
            text: model.text,
            completed: model.completed,
            created_at: model.created_at,
        }
    }
}

impl FromModel<TodoChanges> for ActiveModel {
    fn from_model(changes: TodoChanges) -> Self {
        let mut active = Self::default();
        if let Some(text) = changes.text {
            active.text = ActiveValue::Set(text);
        }
        if let Some(completed) = changes.completed {
            active.completed = ActiveValue::Set(completed);
        }
        active
    }
}
