use crate::validation::{ValidationErrors, WriteMode, invalid_choice_message};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

pub const TITLE_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr, EnumString)]
pub enum GoalType {
    #[serde(rename = "long-term")]
    #[strum(serialize = "long-term")]
    LongTerm,
    #[serde(rename = "short-term")]
    #[strum(serialize = "short-term")]
    ShortTerm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Goal {
    pub id: i32,
    /// Id of the owning user
    pub user: i32,
    #[schema(example = "Run a marathon")]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: GoalType,
    pub created_at: DateTime<FixedOffset>,
}

/// Request body for creating and updating goals.
///
/// Unknown and read-only fields (`id`, `user`, `created_at`) are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GoalPayload {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = Option<String>, example = "Run a marathon")]
    pub title: Option<Option<String>>,
    #[serde(default, rename = "type", with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = Option<GoalType>)]
    pub kind: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    pub title: String,
    pub kind: GoalType,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GoalChanges {
    pub title: Option<String>,
    pub kind: Option<GoalType>,
}

impl GoalPayload {
    fn validate(self, mode: WriteMode) -> (GoalChanges, ValidationErrors) {
        let mut errors = ValidationErrors::default();
        let title = errors.text("title", self.title, mode, Some(TITLE_MAX_LENGTH));
        let kind = errors
            .value("type", self.kind, mode)
            .and_then(|kind| match GoalType::from_str(&kind) {
                Ok(kind) => Some(kind),
                Err(_) => {
                    errors.add("type", invalid_choice_message(&kind));
                    None
                }
            });
        (GoalChanges { title, kind }, errors)
    }

    pub fn into_new(self) -> Result<NewGoal, ValidationErrors> {
        let (changes, errors) = self.validate(WriteMode::Create);
        let new = changes
            .title
            .zip(changes.kind)
            .map(|(title, kind)| NewGoal { title, kind });
        errors.finish(new)
    }

    pub fn into_changes(self, mode: WriteMode) -> Result<GoalChanges, ValidationErrors> {
        let (changes, errors) = self.validate(mode);
        errors.finish(Some(changes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{NOT_NULL, REQUIRED};
    use chrono::TimeZone;

    fn payload(json: &str) -> GoalPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_serialize() {
        let created_at = chrono::Utc
            .with_ymd_and_hms(2024, 10, 19, 8, 30, 0)
            .unwrap()
            .fixed_offset();
        let goal = Goal {
            id: 1,
            user: 7,
            title: "Learn Rust".to_owned(),
            kind: GoalType::LongTerm,
            created_at,
        };
        assert_eq!(
            serde_json::to_value(&goal).unwrap(),
            serde_json::json!({
                "id": 1,
                "user": 7,
                "title": "Learn Rust",
                "type": "long-term",
                "created_at": "2024-10-19T08:30:00Z",
            })
        );
    }

    #[test]
    fn test_goal_type_strings() {
        assert_eq!("short-term", GoalType::ShortTerm.to_string());
        assert_eq!(GoalType::from_str("long-term").unwrap(), GoalType::LongTerm);
        assert!(GoalType::from_str("Long-Term").is_err());
    }

    #[test]
    fn test_into_new() {
        let new = payload(r#"{"title": " Learn Rust ", "type": "long-term", "user": 99, "id": 5}"#)
            .into_new()
            .unwrap();
        assert_eq!(
            new,
            NewGoal {
                title: "Learn Rust".to_owned(),
                kind: GoalType::LongTerm
            }
        );
    }

    #[test]
    fn test_into_new_missing_fields() {
        let errors = payload("{}").into_new().unwrap_err();
        assert_eq!(errors.messages("title"), [REQUIRED]);
        assert_eq!(errors.messages("type"), [REQUIRED]);
    }

    #[test]
    fn test_invalid_type() {
        let errors = payload(r#"{"title": "x", "type": "mid-term"}"#)
            .into_new()
            .unwrap_err();
        assert_eq!(errors.messages("type"), [r#""mid-term" is not a valid choice."#]);
        assert!(errors.messages("title").is_empty());
    }

    #[test]
    fn test_title_too_long() {
        let title = "a".repeat(TITLE_MAX_LENGTH + 1);
        let errors = GoalPayload {
            title: Some(Some(title)),
            kind: Some(Some("short-term".to_owned())),
        }
        .into_new()
        .unwrap_err();
        assert_eq!(
            errors.messages("title"),
            ["Ensure this field has no more than 255 characters."]
        );
    }

    #[test]
    fn test_partial_changes() {
        let changes = payload(r#"{"type": "short-term"}"#)
            .into_changes(WriteMode::Partial)
            .unwrap();
        assert_eq!(
            changes,
            GoalChanges {
                title: None,
                kind: Some(GoalType::ShortTerm)
            }
        );

        let errors = payload(r#"{"type": "short-term"}"#)
            .into_changes(WriteMode::Replace)
            .unwrap_err();
        assert_eq!(errors.messages("title"), [REQUIRED]);

        let errors = payload(r#"{"title": null}"#)
            .into_changes(WriteMode::Partial)
            .unwrap_err();
        assert_eq!(errors.messages("title"), [NOT_NULL]);
    }
}
