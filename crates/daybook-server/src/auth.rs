use crate::app::InnerAuthConfig;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, Header, Validation};
use serde::{Deserialize, Serialize};
use std::error::Error;
use strum::Display;
use thiserror::Error;
use uuid::Uuid;

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Error, Debug)]
pub(crate) enum AuthError {
    #[error("Token is invalid or expired")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("Token has wrong type, expected {expected}")]
    WrongTokenType { expected: TokenType },

    #[error("Failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub(crate) enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub token_type: TokenType,
    pub user_id: i32,
    // issued at
    pub iat: i64,
    pub exp: i64,
    pub jti: Uuid,
}

pub(crate) fn issue_token(config: &InnerAuthConfig, token_type: TokenType, user_id: i32) -> Result<String, AuthError> {
    let lifetime = match token_type {
        TokenType::Access => config.access_token_lifetime(),
        TokenType::Refresh => config.refresh_token_lifetime(),
    };
    let now = Utc::now();
    let claims = Claims {
        token_type,
        user_id,
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
        jti: Uuid::new_v4(),
    };
    jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, config.encoding_key()).map_err(|error| {
        tracing::error!(error = &error as &dyn Error, %user_id, "failed to sign token");
        AuthError::Signing(error)
    })
}

/// Checks signature and expiry (without leeway) and that the token is of the `expected` type.
pub(crate) fn validate_token(config: &InnerAuthConfig, token: &str, expected: TokenType) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);

    let claims = jsonwebtoken::decode::<Claims>(token, config.decoding_key(), &validation)
        .map_err(|error| {
            if !matches!(error.kind(), ErrorKind::ExpiredSignature) {
                tracing::debug!(error = &error as &dyn Error, "rejected token");
            }
            AuthError::InvalidToken(error)
        })?
        .claims;

    if claims.token_type != expected {
        tracing::debug!(user_id = claims.user_id, %expected, actual = %claims.token_type, "wrong token type");
        return Err(AuthError::WrongTokenType { expected });
    }
    Ok(claims)
}
