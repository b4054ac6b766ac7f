pub(crate) mod error;
pub(crate) mod goals;
pub(crate) mod identity;
pub(crate) mod journal;
pub(crate) mod todos;
pub(crate) mod user;

use crate::routes::api::error::RecordError;
use crate::routes::global;
use axum::Router;
use axum::extract::{FromRequestParts, Path};
use http::request::Parts;

/// Everything below `/api`. Paths keep their trailing slash.
pub(crate) fn create_router<S>(deletable: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(identity::create_router())
        .merge(user::create_router(deletable))
        .merge(goals::create_router())
        .merge(todos::create_router())
        .merge(journal::create_router())
        .method_not_allowed_fallback(global::method_not_allowed)
        .with_state(())
}

/// Id of a record in the path. Anything that is not an id cannot name a record, so it is a 404.
pub(crate) struct RecordId(pub i32);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = RecordError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "invalid record id");
            RecordError::NotFound
        })?;
        Ok(Self(id))
    }
}
