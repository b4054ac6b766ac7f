//! Field level validation shared by all write payloads.
//!
//! Payload fields are deserialized as `Option<Option<T>>`: the outer option tells whether the
//! field was sent at all, the inner one whether it was `null`.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";

pub fn max_length_message(max: usize) -> String {
    format!("Ensure this field has no more than {max} characters.")
}

pub fn invalid_choice_message(value: &str) -> String {
    format!("\"{value}\" is not a valid choice.")
}

/// How a payload is applied to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// A new record, every required field has to be present.
    Create,
    /// Full update (`PUT`), every required field has to be present.
    Replace,
    /// Partial update (`PATCH`), missing fields stay untouched.
    Partial,
}

impl WriteMode {
    #[must_use]
    pub fn requires_all(self) -> bool {
        !matches!(self, Self::Partial)
    }
}

/// Validation messages keyed by field name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("invalid input for {} field(s)", .0.len())]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn single<M: Into<String>>(field: &str, message: M) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add<M: Into<String>>(&mut self, field: &str, message: M) {
        self.0.entry(field.to_owned()).or_default().push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[][..], Vec::as_slice)
    }

    pub fn into_data(self) -> Map<String, Value> {
        self.0
            .into_iter()
            .map(|(field, messages)| (field, Value::from(messages)))
            .collect()
    }

    /// Unwraps a present, non-null value and records an error otherwise.
    #[allow(clippy::option_option)]
    pub fn value<T>(&mut self, field: &str, value: Option<Option<T>>, mode: WriteMode) -> Option<T> {
        match value {
            None => {
                if mode.requires_all() {
                    self.add(field, REQUIRED);
                }
                None
            }
            Some(None) => {
                self.add(field, NOT_NULL);
                None
            }
            Some(Some(value)) => Some(value),
        }
    }

    /// Like [`Self::value`], but trims the text and rejects blank or overlong values.
    #[allow(clippy::option_option)]
    pub fn text(
        &mut self,
        field: &str,
        value: Option<Option<String>>,
        mode: WriteMode,
        max_length: Option<usize>,
    ) -> Option<String> {
        let value = self.value(field, value, mode)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.add(field, NOT_BLANK);
            return None;
        }
        if let Some(max) = max_length
            && trimmed.chars().count() > max
        {
            self.add(field, max_length_message(max));
            return None;
        }
        Some(trimmed.to_owned())
    }

    pub fn finish<T>(self, value: Option<T>) -> Result<T, Self> {
        match value {
            Some(value) if self.is_empty() => Ok(value),
            _ => Err(self),
        }
    }
}
