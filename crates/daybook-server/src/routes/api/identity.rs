use crate::app::AuthConfig;
use crate::auth::{TokenType, issue_token, validate_token};
use crate::password::{hash_password_blocking, verify_password_blocking};
use crate::routes::api::error::IdentityError;
use crate::routes::error::{ErrorData, ErrorType};
use crate::routes::extract::ApiJson;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Extension, Json, Router};
use daybook_db::sea_orm::DatabaseConnection;
use daybook_db::user;
use daybook_db::util::UniqueViolation;
use daybook_model::login::{AccessToken, RefreshRequest, TokenPair, TokenRequest};
use daybook_model::user::{RegisterPayload, USERNAME_TAKEN, User};
use daybook_model::validation::ValidationErrors;
use daybook_model_tools::convert::FromDbModel;
use http::StatusCode;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/register/", post(register))
        .route("/token/", post(obtain_token))
        .route("/token/refresh/", post(refresh_token))
        .with_state(())
}

#[utoipa::path(
    post,
    path = "/api/register/",
    request_body = RegisterPayload,
    responses(
        (status = CREATED, description = "the new user", body = User),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
    ),
    tag = "identity",
)]
pub(crate) async fn register(
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<RegisterPayload>,
) -> Result<impl IntoResponse, IdentityError> {
    let new = payload.into_new()?;
    if user::Query::find_user_by_username(&conn, &new.username).await?.is_some() {
        return Err(ValidationErrors::single("username", USERNAME_TAKEN).into());
    }

    let password_hash = hash_password_blocking(new.password).await?;
    // Two registrations can race past the check above, the unique index decides
    let user = match user::Mutation::create_user(&conn, new.username, new.email, password_hash).await {
        Ok(user) => user,
        Err(error) if error.is_unique_violation() => {
            return Err(ValidationErrors::single("username", USERNAME_TAKEN).into());
        }
        Err(error) => return Err(error.into()),
    };
    tracing::info!(user_id = user.id, username = %user.username, "registered user");

    Ok((StatusCode::CREATED, Json(User::from_db_model(user))))
}

#[utoipa::path(
    post,
    path = "/api/token/",
    request_body = TokenRequest,
    responses(
        (status = OK, description = "a new access and refresh token", body = TokenPair),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
        (status = UNAUTHORIZED, description = "unknown user or wrong password", body = ErrorData<ErrorType>),
    ),
    tag = "identity",
)]
pub(crate) async fn obtain_token(
    Extension(auth_config): Extension<AuthConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<TokenRequest>,
) -> Result<impl IntoResponse, IdentityError> {
    let credentials = payload.into_credentials()?;
    let Some(user) = user::Query::find_user_by_username(&conn, &credentials.username).await? else {
        // Hash anyway so unknown usernames take as long as wrong passwords
        hash_password_blocking(credentials.password).await?;
        tracing::debug!(username = %credentials.username, "login of unknown user");
        return Err(IdentityError::InvalidCredentials);
    };

    if !verify_password_blocking(credentials.password, user.password).await? {
        tracing::debug!(user_id = user.id, "login with wrong password");
        return Err(IdentityError::InvalidCredentials);
    }

    let auth_config = auth_config.as_ref();
    let tokens = TokenPair {
        access: issue_token(auth_config, TokenType::Access, user.id)?,
        refresh: issue_token(auth_config, TokenType::Refresh, user.id)?,
    };
    tracing::debug!(user_id = user.id, "issued token pair");

    Ok(Json(tokens))
}

#[utoipa::path(
    post,
    path = "/api/token/refresh/",
    request_body = RefreshRequest,
    responses(
        (status = OK, description = "a new access token", body = AccessToken),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
        (status = UNAUTHORIZED, description = "the refresh token is invalid, expired or not a refresh token", body = ErrorData<ErrorType>),
    ),
    tag = "identity",
)]
pub(crate) async fn refresh_token(
    Extension(auth_config): Extension<AuthConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<RefreshRequest>,
) -> Result<impl IntoResponse, IdentityError> {
    let token = payload.into_token()?;
    let claims = validate_token(auth_config.as_ref(), &token, TokenType::Refresh)?;
    let user_id = claims.user_id;
    if user::Query::find_user_by_id(&conn, user_id).await?.is_none() {
        tracing::debug!(%user_id, "refresh token of deleted user");
        return Err(IdentityError::UnknownUser);
    }

    let access = issue_token(auth_config.as_ref(), TokenType::Access, user_id)?;
    Ok(Json(AccessToken { access }))
}
