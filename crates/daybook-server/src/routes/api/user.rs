use crate::routes::api::error::RecordError;
use crate::routes::error::{ErrorData, ErrorType};
use crate::user::{ExtractUser, ExtractUserId};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use daybook_db::sea_orm::DatabaseConnection;
use daybook_db::user;
use daybook_model::user::User;
use http::StatusCode;

pub(crate) fn create_router<S>(deletable: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let mut user_routes = get(get_user_info);
    if deletable {
        user_routes = user_routes.delete(delete_user);
    }
    Router::new().route("/user/", user_routes).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/user/",
    responses(
        (status = OK, description = "the current user", body = User),
        (status = UNAUTHORIZED, body = ErrorData<ErrorType>),
    ),
    tag = "user",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_user_info(ExtractUser(user): ExtractUser) -> impl IntoResponse {
    Json(user)
}

#[utoipa::path(
    delete,
    path = "/api/user/",
    responses(
        (status = NO_CONTENT, description = "the user and all their records were deleted"),
        (status = UNAUTHORIZED, body = ErrorData<ErrorType>),
        (status = METHOD_NOT_ALLOWED, description = "account deletion is disabled"),
    ),
    tag = "user",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_user(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, RecordError> {
    user::Mutation::delete(&conn, user_id).await?;
    tracing::info!(%user_id, "deleted user");

    Ok(StatusCode::NO_CONTENT)
}
