use axum::Json;
use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::error::Error;
use utoipa::ToSchema;

/// Machine readable error code, the `error` field of every error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ErrorType {
    ValidationError,
    ParseError,
    UnsupportedMediaType,
    InvalidCredentials,
    NotAuthenticated,
    TokenNotValid,
    NotFound,
    MethodNotAllowed,
    Conflict,
    ServerError,
}

pub(crate) trait GetStatusCode {
    fn status_code(&self) -> StatusCode;
}

impl GetStatusCode for ErrorType {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError | Self::ParseError => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InvalidCredentials | Self::NotAuthenticated | Self::TokenNotValid => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict => StatusCode::CONFLICT,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorData<T> {
    pub(crate) error: T,
    #[schema(value_type = String)]
    pub(crate) error_description: Cow<'static, str>,
    /// Messages per field for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub(crate) data: Option<Map<String, Value>>,
}

impl<T> ErrorData<T> {
    pub fn new<A: Into<Cow<'static, str>>>(error: T, error_description: A) -> Self {
        Self {
            error,
            error_description: error_description.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }
}

impl IntoResponse for ErrorData<ErrorType> {
    fn into_response(self) -> Response {
        (self.error.status_code(), Json(self)).into_response()
    }
}

/// Errors that can describe themselves to the client.
///
/// `None` means the details are internal; the client only sees a generic server error.
pub(crate) trait ErrorDataProvider {
    fn error_data(self) -> Option<ErrorData<ErrorType>>;
}

pub(crate) fn error_to_axum_response<T>(error: T) -> Response
where
    T: GetStatusCode + ErrorDataProvider + Error + 'static,
{
    let status_code = GetStatusCode::status_code(&error);
    if status_code.is_server_error() {
        tracing::error!(error = &error as &dyn Error, "request failed");
    }
    let data = error
        .error_data()
        .unwrap_or_else(|| ErrorData::new(ErrorType::ServerError, "A server error occurred."));
    let mut response = data.into_response();
    if response.status() == StatusCode::UNAUTHORIZED {
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(r#"Bearer realm="api""#));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use test_log::test;
    use thiserror::Error;

    #[derive(Error, Debug)]
    enum SampleError {
        #[error("no token")]
        Unauthorized,
        #[error("connection pool exhausted")]
        Internal,
    }

    impl GetStatusCode for SampleError {
        fn status_code(&self) -> StatusCode {
            match self {
                Self::Unauthorized => StatusCode::UNAUTHORIZED,
                Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl ErrorDataProvider for SampleError {
        fn error_data(self) -> Option<ErrorData<ErrorType>> {
            match self {
                Self::Unauthorized => Some(ErrorData::new(ErrorType::NotAuthenticated, "no token")),
                Self::Internal => None,
            }
        }
    }

    async fn body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test(tokio::test)]
    async fn test_unauthorized_has_challenge() {
        let response = error_to_axum_response(SampleError::Unauthorized);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            r#"Bearer realm="api""#
        );
        assert_eq!(
            body(response).await,
            serde_json::json!({"error": "not_authenticated", "error_description": "no token"})
        );
    }

    #[test(tokio::test)]
    async fn test_internal_details_are_hidden() {
        let response = error_to_axum_response(SampleError::Internal);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
        assert_eq!(
            body(response).await,
            serde_json::json!({"error": "server_error", "error_description": "A server error occurred."})
        );
    }

    #[test(tokio::test)]
    async fn test_error_data_response() {
        let response = ErrorData::new(ErrorType::MethodNotAllowed, "Method \"PUT\" not allowed.").into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body(response).await["error"], "method_not_allowed");
    }
}
