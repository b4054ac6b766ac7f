use crate::convert::{FromDbModel, FromModel};
use daybook_entity::journal_entry::{ActiveModel, Model as JournalEntryModel};
use daybook_model::journal::{JournalEntry, JournalEntryChanges};
use sea_orm::ActiveValue;

impl FromDbModel<JournalEntryModel> for JournalEntry {
    fn from_db_model(model: JournalEntryModel) -> Self {
        Self {
            id: model.id,
            user: model.user_id,
            content: model.content,
            date: model.date,
        }
    }
}

impl FromModel<JournalEntryChanges> for ActiveModel {
    fn from_model(changes: JournalEntryChanges) -> Self {
        Self {
            content: changes.content.map_or(ActiveValue::NotSet, ActiveValue::Set),
            ..Self::default()
        }
    }
}
