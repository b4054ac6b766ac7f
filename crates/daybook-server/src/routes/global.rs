use crate::routes::error::{ErrorData, ErrorType};
use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;
use http::Method;

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health)).with_state(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = OK, body = String, description = "the server is up", example = "ok")
    ),
    tag = "util"
)]
pub(crate) async fn health() -> impl IntoResponse {
    "ok"
}

/// Fallback for paths no route matches.
pub(crate) async fn not_found() -> ErrorData<ErrorType> {
    ErrorData::new(ErrorType::NotFound, "Not found.")
}

/// Fallback for known paths requested with a method they do not support.
pub(crate) async fn method_not_allowed(method: Method) -> ErrorData<ErrorType> {
    ErrorData::new(ErrorType::MethodNotAllowed, format!("Method \"{method}\" not allowed."))
}
