use crate::app::AuthConfig;
use crate::auth::{AuthError, TokenType, validate_token};
use crate::routes::error::{ErrorData, ErrorDataProvider, ErrorType, GetStatusCode, error_to_axum_response};
use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use axum::{Extension, RequestPartsExt};
use axum_auth::AuthBearer;
use axum_extra::extract::Cached;
use daybook_db::sea_orm::{DatabaseConnection, DbErr};
use daybook_db::user;
use daybook_model::user::User;
use daybook_model_tools::convert::IntoModel;
use http::StatusCode;
use http::request::Parts;
use std::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum SessionError {
    #[error("Authentication credentials were not provided.")]
    MissingToken,

    #[error(transparent)]
    InvalidToken(#[from] AuthError),

    #[error("User of the token does not exist")]
    UnknownUser,

    #[error("{0} not found in app data")]
    MissingExtension(&'static str),

    #[error("Database error.")]
    SeaOrm(#[from] DbErr),
}

impl GetStatusCode for SessionError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken
            | Self::UnknownUser
            | Self::InvalidToken(AuthError::InvalidToken(_) | AuthError::WrongTokenType { .. }) => {
                StatusCode::UNAUTHORIZED
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorDataProvider for SessionError {
    fn error_data(self) -> Option<ErrorData<ErrorType>> {
        let res = match self {
            Self::MissingToken => ErrorData::new(ErrorType::NotAuthenticated, "Authentication credentials were not provided."),
            Self::UnknownUser
            | Self::InvalidToken(AuthError::InvalidToken(_) | AuthError::WrongTokenType { .. }) => {
                ErrorData::new(ErrorType::TokenNotValid, "Given token not valid for any token type")
            }
            Self::InvalidToken(AuthError::Signing(_)) | Self::MissingExtension(_) | Self::SeaOrm(_) => return None,
        };
        Some(res)
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}

#[derive(Clone)]
struct Session {
    user: User,
}

/// The user of a valid access token, loaded from the database.
#[derive(Clone)]
pub(crate) struct ExtractUser(pub User);

#[derive(Clone)]
pub(crate) struct ExtractUserId(pub i32);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = SessionError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Ok(AuthBearer(token)) = parts.extract::<AuthBearer>().await else {
            return Err(SessionError::MissingToken);
        };

        let Extension::<AuthConfig>(auth_config) = parts.extract::<Extension<AuthConfig>>().await.map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "auth config not found in app data");
            SessionError::MissingExtension("Auth config")
        })?;
        let Extension::<DatabaseConnection>(conn) =
            parts
                .extract::<Extension<DatabaseConnection>>()
                .await
                .map_err(|error| {
                    tracing::error!(
                        error = &error as &dyn Error,
                        "database connection not found in app data"
                    );
                    SessionError::MissingExtension("Database connection")
                })?;

        let claims = validate_token(auth_config.as_ref(), &token, TokenType::Access)?;
        let user_id = claims.user_id;
        let Some(user) = user::Query::find_user_by_id(&conn, user_id).await? else {
            tracing::debug!(%user_id, "token of deleted user");
            return Err(SessionError::UnknownUser);
        };

        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                id: Some(user_id.to_string()),
                username: Some(user.username.clone()),
                ..Default::default()
            }));
        });

        Ok(Self {
            user: user.into_model(),
        })
    }
}

impl<S> FromRequestParts<S> for ExtractUser
where
    S: Send + Sync,
{
    type Rejection = SessionError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session: Session = Cached::<Session>::from_request_parts(parts, state).await?.0;
        Ok(Self(session.user))
    }
}

impl<S> FromRequestParts<S> for ExtractUserId
where
    S: Send + Sync,
{
    type Rejection = SessionError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session: Session = Cached::<Session>::from_request_parts(parts, state).await?.0;
        Ok(Self(session.user.id))
    }
}
