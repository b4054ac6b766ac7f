use super::api;
use super::global;

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::identity::register,
        api::identity::obtain_token,
        api::identity::refresh_token,
        api::user::get_user_info,
        api::user::delete_user,
        api::goals::list_goals,
        api::goals::create_goal,
        api::goals::get_goal,
        api::goals::replace_goal,
        api::goals::update_goal,
        api::goals::delete_goal,
        api::todos::list_todos,
        api::todos::create_todo,
        api::todos::get_todo,
        api::todos::replace_todo,
        api::todos::update_todo,
        api::todos::delete_todo,
        api::journal::list_journal_entries,
        api::journal::create_journal_entry,
        api::journal::get_journal_entry,
        api::journal::replace_journal_entry,
        api::journal::update_journal_entry,
        api::journal::delete_journal_entry,
        global::health,
    ),
    modifiers(&SecurityAddon),
    tags()
)]
pub(crate) struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let Some(components) = openapi.components.as_mut() else {
            tracing::warn!("openapi document has no components, not adding the token scheme");
            return;
        };
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token from `/api/token/`"))
                    .build(),
            ),
        );
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .with_state(())
}
