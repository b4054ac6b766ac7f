use crate::auth::AuthError;
use crate::password::PasswordError;
use crate::routes::error::{ErrorData, ErrorDataProvider, ErrorType, GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use daybook_db::sea_orm::DbErr;
use daybook_model::validation::ValidationErrors;
use http::StatusCode;
use thiserror::Error;

const INVALID_INPUT: &str = "Invalid input.";

#[derive(Error, Debug)]
pub(crate) enum RecordError {
    #[error("Not found.")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("A journal entry for this day already exists.")]
    JournalEntryExists,

    #[error("Database error.")]
    SeaOrmError(#[from] DbErr),
}

impl GetStatusCode for RecordError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::SeaOrmError(DbErr::RecordNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::JournalEntryExists => StatusCode::CONFLICT,
            Self::SeaOrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorDataProvider for RecordError {
    fn error_data(self) -> Option<ErrorData<ErrorType>> {
        let res = match self {
            Self::NotFound | Self::SeaOrmError(DbErr::RecordNotFound(_)) => {
                ErrorData::new(ErrorType::NotFound, "Not found.")
            }
            Self::Validation(errors) => {
                ErrorData::new(ErrorType::ValidationError, INVALID_INPUT).with_data(errors.into_data())
            }
            Self::JournalEntryExists => {
                ErrorData::new(ErrorType::Conflict, "A journal entry for this day already exists.")
            }
            Self::SeaOrmError(_) => return None,
        };
        Some(res)
    }
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}

#[derive(Error, Debug)]
pub(crate) enum IdentityError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("No active account found with the given credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("User of the token does not exist")]
    UnknownUser,

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("Database error.")]
    SeaOrmError(#[from] DbErr),
}

impl GetStatusCode for IdentityError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials
            | Self::UnknownUser
            | Self::Auth(AuthError::InvalidToken(_) | AuthError::WrongTokenType { .. }) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::Signing(_)) | Self::Password(_) | Self::SeaOrmError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ErrorDataProvider for IdentityError {
    fn error_data(self) -> Option<ErrorData<ErrorType>> {
        let res = match self {
            Self::Validation(errors) => {
                ErrorData::new(ErrorType::ValidationError, INVALID_INPUT).with_data(errors.into_data())
            }
            Self::InvalidCredentials => ErrorData::new(
                ErrorType::InvalidCredentials,
                "No active account found with the given credentials",
            ),
            Self::UnknownUser | Self::Auth(AuthError::InvalidToken(_) | AuthError::WrongTokenType { .. }) => {
                ErrorData::new(ErrorType::TokenNotValid, "Token is invalid or expired")
            }
            Self::Auth(AuthError::Signing(_)) | Self::Password(_) | Self::SeaOrmError(_) => return None,
        };
        Some(res)
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
