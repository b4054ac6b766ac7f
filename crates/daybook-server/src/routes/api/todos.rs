use crate::routes::api::RecordId;
use crate::routes::api::error::RecordError;
use crate::routes::error::{ErrorData, ErrorType};
use crate::routes::extract::ApiJson;
use crate::user::ExtractUserId;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use daybook_db::sea_orm::DatabaseConnection;
use daybook_db::todo;
use daybook_model::todo::{Todo, TodoPayload};
use daybook_model::validation::WriteMode;
use daybook_model_tools::convert::{FromDbModel, IntoDbModel, IntoModels};
use http::StatusCode;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}/",
            get(get_todo).put(replace_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/todos/",
    responses(
        (status = OK, description = "all todos of the current user, oldest first", body = [Todo]),
        (status = UNAUTHORIZED, body = ErrorData<ErrorType>),
    ),
    tag = "todos",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_todos(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, RecordError> {
    let todos: Vec<Todo> = todo::Query::get_user_todos(&conn, user_id).await?.into_models();
    Ok(Json(todos))
}

#[utoipa::path(
    post,
    path = "/api/todos/",
    request_body = TodoPayload,
    responses(
        (status = CREATED, description = "the created todo", body = Todo),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
    ),
    tag = "todos",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_todo(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<TodoPayload>,
) -> Result<impl IntoResponse, RecordError> {
    let new = payload.into_new()?;
    let todo = todo::Mutation::create_todo(&conn, user_id, new.text, new.completed).await?;
    tracing::debug!(%user_id, todo_id = todo.id, "created todo");

    Ok((StatusCode::CREATED, Json(Todo::from_db_model(todo))))
}

#[utoipa::path(
    get,
    path = "/api/todos/{id}/",
    params(("id" = i32, Path, description = "todo id")),
    responses(
        (status = OK, body = Todo),
        (status = NOT_FOUND, description = "no such todo, or it belongs to someone else", body = ErrorData<ErrorType>),
    ),
    tag = "todos",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_todo(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, RecordError> {
    let todo = todo::Query::get_user_todo(&conn, user_id, id)
        .await?
        .ok_or(RecordError::NotFound)?;

    Ok(Json(Todo::from_db_model(todo)))
}

async fn write_todo(
    conn: &DatabaseConnection,
    user_id: i32,
    id: i32,
    payload: TodoPayload,
    mode: WriteMode,
) -> Result<Todo, RecordError> {
    let changes = payload.into_changes(mode)?;
    tracing::debug!(%user_id, todo_id = id, ?changes, "updating todo");
    let todo = todo::Mutation::update_user_todo(conn, user_id, id, changes.into_db_model()).await?;
    Ok(Todo::from_db_model(todo))
}

#[utoipa::path(
    put,
    path = "/api/todos/{id}/",
    params(("id" = i32, Path, description = "todo id")),
    request_body = TodoPayload,
    responses(
        (status = OK, description = "the updated todo, `text` is required", body = Todo),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
        (status = NOT_FOUND, body = ErrorData<ErrorType>),
    ),
    tag = "todos",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn replace_todo(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<TodoPayload>,
) -> Result<impl IntoResponse, RecordError> {
    Ok(Json(write_todo(&conn, user_id, id, payload, WriteMode::Replace).await?))
}

#[utoipa::path(
    patch,
    path = "/api/todos/{id}/",
    params(("id" = i32, Path, description = "todo id")),
    request_body = TodoPayload,
    responses(
        (status = OK, description = "the updated todo", body = Todo),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
        (status = NOT_FOUND, body = ErrorData<ErrorType>),
    ),
    tag = "todos",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn update_todo(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<TodoPayload>,
) -> Result<impl IntoResponse, RecordError> {
    Ok(Json(write_todo(&conn, user_id, id, payload, WriteMode::Partial).await?))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{id}/",
    params(("id" = i32, Path, description = "todo id")),
    responses(
        (status = NO_CONTENT, description = "todo deleted"),
        (status = NOT_FOUND, body = ErrorData<ErrorType>),
    ),
    tag = "todos",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_todo(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, RecordError> {
    todo::Mutation::delete_user_todo(&conn, user_id, id).await?;
    tracing::debug!(%user_id, todo_id = id, "deleted todo");

    Ok(StatusCode::NO_CONTENT)
}
