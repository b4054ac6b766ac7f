use crate::routes::error::{ErrorData, ErrorDataProvider, ErrorType, GetStatusCode, error_to_axum_response};
use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// `Json` with rejections rendered as [`ErrorData`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(BodyError))]
pub(crate) struct ApiJson<T>(pub T);

#[derive(Error, Debug)]
pub(crate) enum BodyError {
    #[error(transparent)]
    Json(#[from] JsonRejection),
}

impl GetStatusCode for BodyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Json(JsonRejection::MissingJsonContentType(_)) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Json(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl ErrorDataProvider for BodyError {
    fn error_data(self) -> Option<ErrorData<ErrorType>> {
        let Self::Json(rejection) = self;
        let error = match &rejection {
            JsonRejection::MissingJsonContentType(_) => ErrorType::UnsupportedMediaType,
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) | JsonRejection::BytesRejection(_) => {
                ErrorType::ParseError
            }
            _ => return None,
        };
        Some(ErrorData::new(error, rejection.body_text()))
    }
}

impl IntoResponse for BodyError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
