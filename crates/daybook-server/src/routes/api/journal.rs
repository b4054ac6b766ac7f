use crate::routes::api::RecordId;
use crate::routes::api::error::RecordError;
use crate::routes::error::{ErrorData, ErrorType};
use crate::routes::extract::ApiJson;
use crate::user::ExtractUserId;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Utc;
use daybook_db::journal_entry;
use daybook_db::sea_orm::DatabaseConnection;
use daybook_db::util::UniqueViolation;
use daybook_model::journal::{JournalEntry, JournalEntryPayload};
use daybook_model::validation::WriteMode;
use daybook_model_tools::convert::{FromDbModel, IntoDbModel, IntoModels};
use http::StatusCode;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/journal/", get(list_journal_entries).post(create_journal_entry))
        .route(
            "/journal/{id}/",
            get(get_journal_entry)
                .put(replace_journal_entry)
                .patch(update_journal_entry)
                .delete(delete_journal_entry),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/journal/",
    responses(
        (status = OK, description = "all journal entries of the current user, oldest first", body = [JournalEntry]),
        (status = UNAUTHORIZED, body = ErrorData<ErrorType>),
    ),
    tag = "journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn list_journal_entries(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, RecordError> {
    let journal_entries: Vec<JournalEntry> = journal_entry::Query::get_user_journal_entries(&conn, user_id)
        .await?
        .into_models();
    Ok(Json(journal_entries))
}

#[utoipa::path(
    post,
    path = "/api/journal/",
    request_body = JournalEntryPayload,
    responses(
        (status = CREATED, description = "the entry for today (UTC)", body = JournalEntry),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
        (status = CONFLICT, description = "there already is an entry for today", body = ErrorData<ErrorType>),
    ),
    tag = "journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_journal_entry(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<JournalEntryPayload>,
) -> Result<impl IntoResponse, RecordError> {
    let new = payload.into_new()?;
    let date = Utc::now().date_naive();
    let journal_entry = match journal_entry::Mutation::create_journal_entry(&conn, user_id, new.content, date).await {
        Ok(journal_entry) => journal_entry,
        Err(error) if error.is_unique_violation() => {
            tracing::debug!(%user_id, %date, "journal entry for today already exists");
            return Err(RecordError::JournalEntryExists);
        }
        Err(error) => return Err(error.into()),
    };
    tracing::debug!(%user_id, journal_entry_id = journal_entry.id, "created journal entry");

    Ok((StatusCode::CREATED, Json(JournalEntry::from_db_model(journal_entry))))
}

#[utoipa::path(
    get,
    path = "/api/journal/{id}/",
    params(("id" = i32, Path, description = "journal entry id")),
    responses(
        (status = OK, body = JournalEntry),
        (status = NOT_FOUND, description = "no such entry, or it belongs to someone else", body = ErrorData<ErrorType>),
    ),
    tag = "journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_journal_entry(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, RecordError> {
    let journal_entry = journal_entry::Query::get_user_journal_entry(&conn, user_id, id)
        .await?
        .ok_or(RecordError::NotFound)?;

    Ok(Json(JournalEntry::from_db_model(journal_entry)))
}

async fn write_journal_entry(
    conn: &DatabaseConnection,
    user_id: i32,
    id: i32,
    payload: JournalEntryPayload,
    mode: WriteMode,
) -> Result<JournalEntry, RecordError> {
    let changes = payload.into_changes(mode)?;
    tracing::debug!(%user_id, journal_entry_id = id, ?changes, "updating journal entry");
    let journal_entry =
        journal_entry::Mutation::update_user_journal_entry(conn, user_id, id, changes.into_db_model()).await?;
    Ok(JournalEntry::from_db_model(journal_entry))
}

#[utoipa::path(
    put,
    path = "/api/journal/{id}/",
    params(("id" = i32, Path, description = "journal entry id")),
    request_body = JournalEntryPayload,
    responses(
        (status = OK, description = "the updated entry, `content` is required", body = JournalEntry),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
        (status = NOT_FOUND, body = ErrorData<ErrorType>),
    ),
    tag = "journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn replace_journal_entry(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<JournalEntryPayload>,
) -> Result<impl IntoResponse, RecordError> {
    Ok(Json(write_journal_entry(&conn, user_id, id, payload, WriteMode::Replace).await?))
}

#[utoipa::path(
    patch,
    path = "/api/journal/{id}/",
    params(("id" = i32, Path, description = "journal entry id")),
    request_body = JournalEntryPayload,
    responses(
        (status = OK, description = "the updated entry", body = JournalEntry),
        (status = BAD_REQUEST, body = ErrorData<ErrorType>),
        (status = NOT_FOUND, body = ErrorData<ErrorType>),
    ),
    tag = "journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn update_journal_entry(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(payload): ApiJson<JournalEntryPayload>,
) -> Result<impl IntoResponse, RecordError> {
    Ok(Json(write_journal_entry(&conn, user_id, id, payload, WriteMode::Partial).await?))
}

#[utoipa::path(
    delete,
    path = "/api/journal/{id}/",
    params(("id" = i32, Path, description = "journal entry id")),
    responses(
        (status = NO_CONTENT, description = "entry deleted"),
        (status = NOT_FOUND, body = ErrorData<ErrorType>),
    ),
    tag = "journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_journal_entry(
    ExtractUserId(user_id): ExtractUserId,
    RecordId(id): RecordId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, RecordError> {
    journal_entry::Mutation::delete_user_journal_entry(&conn, user_id, id).await?;
    tracing::debug!(%user_id, journal_entry_id = id, "deleted journal entry");

    Ok(StatusCode::NO_CONTENT)
}
