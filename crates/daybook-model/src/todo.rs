use crate::validation::{ValidationErrors, WriteMode};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const TEXT_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    pub id: i32,
    pub user: i32,
    #[schema(example = "buy milk")]
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<FixedOffset>,
}

/// Request body for creating and updating todos.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TodoPayload {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = Option<String>, example = "buy milk")]
    pub text: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = Option<bool>)]
    pub completed: Option<Option<bool>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPayload {
    fn validate(self, mode: WriteMode) -> (TodoChanges, ValidationErrors) {
        let mut errors = ValidationErrors::default();
        let text = errors.text("text", self.text, mode, Some(TEXT_MAX_LENGTH));
        // `completed` has a default and is never required
        let completed = errors.value("completed", self.completed, WriteMode::Partial);
        (TodoChanges { text, completed }, errors)
    }

    pub fn into_new(self) -> Result<NewTodo, ValidationErrors> {
        let (changes, errors) = self.validate(WriteMode::Create);
        let completed = changes.completed.unwrap_or(false);
        errors.finish(changes.text.map(|text| NewTodo { text, completed }))
    }

    pub fn into_changes(self, mode: WriteMode) -> Result<TodoChanges, ValidationErrors> {
        let (changes, errors) = self.validate(mode);
        errors.finish(Some(changes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{NOT_BLANK, NOT_NULL, REQUIRED};

    fn payload(json: &str) -> TodoPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_completed_defaults_to_false() {
        let new = payload(r#"{"text": "buy milk"}"#).into_new().unwrap();
        assert_eq!(
            new,
            NewTodo {
                text: "buy milk".to_owned(),
                completed: false
            }
        );
    }

    #[test]
    fn test_text_required() {
        let errors = payload(r#"{"completed": true}"#).into_new().unwrap_err();
        assert_eq!(errors.messages("text"), [REQUIRED]);

        let errors = payload(r#"{"text": "  "}"#).into_new().unwrap_err();
        assert_eq!(errors.messages("text"), [NOT_BLANK]);
    }

    #[test]
    fn test_replace_without_completed() {
        let changes = payload(r#"{"text": "walk the dog", "created_at": "yesterday"}"#)
            .into_changes(WriteMode::Replace)
            .unwrap();
        assert_eq!(changes.text.as_deref(), Some("walk the dog"));
        assert_eq!(changes.completed, None);
    }

    #[test]
    fn test_completed_not_null() {
        let errors = payload(r#"{"completed": null}"#)
            .into_changes(WriteMode::Partial)
            .unwrap_err();
        assert_eq!(errors.messages("completed"), [NOT_NULL]);
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        assert!(serde_json::from_str::<TodoPayload>(r#"{"completed": "yes"}"#).is_err());
    }
}
