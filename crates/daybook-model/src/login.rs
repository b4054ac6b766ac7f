use crate::validation::{ValidationErrors, WriteMode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TokenRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = String, example = "alice")]
    pub username: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = String)]
    pub password: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl TokenRequest {
    pub fn into_credentials(self) -> Result<Credentials, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let username = errors.text("username", self.username, WriteMode::Create, None);
        let password = errors.value("password", self.password, WriteMode::Create);
        errors.finish(
            username
                .zip(password)
                .map(|(username, password)| Credentials { username, password }),
        )
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RefreshRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    #[schema(value_type = String)]
    pub refresh: Option<Option<String>>,
}

impl RefreshRequest {
    pub fn into_token(self) -> Result<String, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let refresh = errors.text("refresh", self.refresh, WriteMode::Create, None);
        errors.finish(refresh)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessToken {
    pub access: String,
}
