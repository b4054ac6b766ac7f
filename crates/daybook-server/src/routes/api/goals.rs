use crate::routes::api::RecordId;
use crate::routes::api::error::RecordError;
use crate::routes::error::{ErrorData, ErrorType};
use crate::routes::extract::ApiJson;
use crate::user::ExtractUserId;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use daybook_db::goal;
use daybook_db::sea_orm::DatabaseConnection;
use daybook_model::goal::{Goal, GoalPayload};
use daybook_model::validation::WriteMode;
use daybook_model_tools::convert::{FromDbModel, IntoDbModel, IntoModels};
use http::StatusCode;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/goals/", get(list_goals).post(create_goal))
        .route(
            "/goals/{id}/",
            get(get_goal).put(replace_goal).patch(update_goal).delete(delete_goal),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/goals/",
    responses(
        (status = OK, description = "all goals of the current user, oldest first", body = [Goal]),
        (status = UNAUTHORIZED, body = ErrorData<ErrorType>),
    ),
    tag = "goals",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_goals(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, RecordError> {
    let goals: Vec<Goal> = goal::Query::get_user_goals(&conn, user_id).await?.into_models();
    Ok(Json(goals))
}

#[utoipa::path(
    post,
    path = "/api/goals/",
    request_body = GoalPayload,
    responses(
        (status = CREATED, description = "the created goal", body = Goal),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
    ),
    tag = "goals",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_goal(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<GoalPayload>,
) -> Result<impl IntoResponse, RecordError> {
    let new = payload.into_new()?;
    let goal = goal::Mutation::create_goal(&conn, user_id, new.title, new.kind.into_db_model()).await?;
    tracing::debug!(%user_id, goal_id = goal.id, "created goal");

    Ok((StatusCode::CREATED, Json(Goal::from_db_model(goal))))
}

#[utoipa::path(
    get,
    path = "/api/goals/{id}/",
    params(("id" = i32, Path, description = "goal id")),
    responses(
        (status = OK, body = Goal),
        (status = NOT_FOUND, description = "no such goal, or it belongs to someone else", body = ErrorData<ErrorType>),
    ),
    tag = "goals",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_goal(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, RecordError> {
    let goal = goal::Query::get_user_goal(&conn, user_id, id)
        .await?
        .ok_or(RecordError::NotFound)?;

    Ok(Json(Goal::from_db_model(goal)))
}

async fn write_goal(
    conn: &DatabaseConnection,
    user_id: i32,
    id: i32,
    payload: GoalPayload,
    mode: WriteMode,
) -> Result<Goal, RecordError> {
    let changes = payload.into_changes(mode)?;
    tracing::debug!(%user_id, goal_id = id, ?changes, "updating goal");
    let goal = goal::Mutation::update_user_goal(conn, user_id, id, changes.into_db_model()).await?;
    Ok(Goal::from_db_model(goal))
}

#[utoipa::path(
    put,
    path = "/api/goals/{id}/",
    params(("id" = i32, Path, description = "goal id")),
    request_body = GoalPayload,
    responses(
        (status = OK, description = "the updated goal, `title` and `type` are required", body = Goal),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
        (status = NOT_FOUND, body = ErrorData<ErrorType>),
    ),
    tag = "goals",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn replace_goal(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<GoalPayload>,
) -> Result<impl IntoResponse, RecordError> {
    Ok(Json(write_goal(&conn, user_id, id, payload, WriteMode::Replace).await?))
}

#[utoipa::path(
    patch,
    path = "/api/goals/{id}/",
    params(("id" = i32, Path, description = "goal id")),
    request_body = GoalPayload,
    responses(
        (status = OK, description = "the updated goal", body = Goal),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
        (status = NOT_FOUND, body = ErrorData<ErrorType>),
    ),
    tag = "goals",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn update_goal(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<GoalPayload>,
) -> Result<impl IntoResponse, RecordError> {
    Ok(Json(write_goal(&conn, user_id, id, payload, WriteMode::Partial).await?))
}

#[utoipa::path(
    delete,
    path = "/api/goals/{id}/",
    params(("id" = i32, Path, description = "goal id")),
    responses(
        (status = NO_CONTENT, description = "goal deleted"),
        (status = NOT_FOUND, body = ErrorData<ErrorType>),
    ),
    tag = "goals",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_goal(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, RecordError> {
    goal::Mutation::delete_user_goal(&conn, user_id, id).await?;
    tracing::debug!(%user_id, goal_id = id, "deleted goal");

    Ok(StatusCode::NO_CONTENT)
}
