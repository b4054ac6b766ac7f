use crate::validation::{ValidationErrors, WriteMode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry per user and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JournalEntry {
    pub id: i32,
    pub user: i32,
    pub content: String,
    /// The (UTC) day the entry was written, assigned by the server
    pub date: NaiveDate,
}

/// Request body for creating and updating journal entries. `date` is read-only.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct JournalEntryPayload {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = Option<String>)]
    pub content: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    pub content: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JournalEntryChanges {
    pub content: Option<String>,
}

impl JournalEntryPayload {
    pub fn into_new(self) -> Result<NewJournalEntry, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let content = errors.text("content", self.content, WriteMode::Create, None);
        errors.finish(content.map(|content| NewJournalEntry { content }))
    }

    pub fn into_changes(self, mode: WriteMode) -> Result<JournalEntryChanges, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let content = errors.text("content", self.content, mode, None);
        errors.finish(Some(JournalEntryChanges { content }))
    }
}
