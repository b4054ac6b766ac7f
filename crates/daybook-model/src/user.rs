use crate::validation::{NOT_BLANK, ValidationErrors, WriteMode, max_length_message};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const USERNAME_MAX_LENGTH: usize = 150;
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const PASSWORD_MIN_LENGTH: usize = 8;

pub const INVALID_USERNAME: &str =
    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";
pub const USERNAME_TAKEN: &str = "A user with that username already exists.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const PASSWORD_NUMERIC: &str = "This password is entirely numeric.";
pub const PASSWORD_SIMILAR: &str = "The password is too similar to the username.";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    #[schema(example = "alice")]
    pub username: String,
    /// May be empty
    pub email: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RegisterPayload {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = String, example = "alice")]
    pub username: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = Option<String>, example = "alice@example.com")]
    pub email: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = String, example = "correct horse")]
    pub password: Option<Option<String>>,
}

/// A validated registration. `password` is still in plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn is_valid_username(username: &str) -> bool {
    username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

/// Loose plausibility check, delivery is what actually proves an address.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

fn password_problems(password: &str, username: Option<&str>) -> Vec<String> {
    let mut problems = Vec::new();
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        problems.push(format!(
            "This password is too short. It must contain at least {PASSWORD_MIN_LENGTH} characters."
        ));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        problems.push(PASSWORD_NUMERIC.to_owned());
    }
    if username.is_some_and(|username| username.to_lowercase() == password.to_lowercase()) {
        problems.push(PASSWORD_SIMILAR.to_owned());
    }
    problems
}

impl RegisterPayload {
    pub fn into_new(self) -> Result<NewUser, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let username = errors
            .text("username", self.username, WriteMode::Create, Some(USERNAME_MAX_LENGTH))
            .filter(|username| {
                let valid = is_valid_username(username);
                if !valid {
                    errors.add("username", INVALID_USERNAME);
                }
                valid
            });

        // Optional and may be blank
        let email = match errors.value("email", self.email, WriteMode::Partial) {
            None => Some(String::new()),
            Some(email) => {
                let email = email.trim().to_owned();
                if email.chars().count() > EMAIL_MAX_LENGTH {
                    errors.add("email", max_length_message(EMAIL_MAX_LENGTH));
                    None
                } else if !email.is_empty() && !is_valid_email(&email) {
                    errors.add("email", INVALID_EMAIL);
                    None
                } else {
                    Some(email)
                }
            }
        };

        // Passwords are taken verbatim, surrounding whitespace included
        let password = errors
            .value("password", self.password, WriteMode::Create)
            .filter(|password| {
                if password.trim().is_empty() {
                    errors.add("password", NOT_BLANK);
                    return false;
                }
                let problems = password_problems(password, username.as_deref());
                let valid = problems.is_empty();
                for problem in problems {
                    errors.add("password", problem);
                }
                valid
            });

        let new = match (username, email, password) {
            (Some(username), Some(email), Some(password)) => Some(NewUser {
                username,
                email,
                password,
            }),
            _ => None,
        };
        errors.finish(new)
    }
}
