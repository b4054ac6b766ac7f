use crate::routes;
use axum::{Extension, Router};
use chrono::TimeDelta;
use http::{HeaderValue, Method, header};
use jsonwebtoken::{DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;
use sentry_tower::{NewSentryLayer, SentryHttpLayer};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub(crate) struct InnerAuthConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_lifetime: TimeDelta,
    refresh_token_lifetime: TimeDelta,
}

impl InnerAuthConfig {
    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    pub(crate) fn access_token_lifetime(&self) -> TimeDelta {
        self.access_token_lifetime
    }

    pub(crate) fn refresh_token_lifetime(&self) -> TimeDelta {
        self.refresh_token_lifetime
    }
}

#[derive(Clone)]
pub(crate) struct AuthConfig(Arc<InnerAuthConfig>);

impl AuthConfig {
    pub(crate) fn new(secret: &[u8], access_token_lifetime: TimeDelta, refresh_token_lifetime: TimeDelta) -> Self {
        Self(Arc::new(InnerAuthConfig {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_token_lifetime,
            refresh_token_lifetime,
        }))
    }
}

impl AsRef<InnerAuthConfig> for AuthConfig {
    fn as_ref(&self) -> &InnerAuthConfig {
        &self.0
    }
}

/// Builds the application router without the metrics endpoint, which needs a process wide recorder.
pub(crate) fn create_app(
    auth_config: AuthConfig,
    origins: &[String],
    deletable: bool,
    seaorm_pool: DatabaseConnection,
) -> anyhow::Result<Router> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse())
        .collect::<Result<Vec<HeaderValue>, _>>()?;
    if !origins.is_empty() {
        tracing::info!(?origins, "allowing origins");
    }

    let api_cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION, header::ORIGIN])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(3600));

    if deletable {
        tracing::info!("users can delete their account");
    }

    let app = Router::new()
        .merge(routes::openapi::create_router())
        .merge(routes::global::create_router())
        .nest("/api", routes::api::create_router(deletable).layer(api_cors))
        .method_not_allowed_fallback(routes::global::method_not_allowed)
        .fallback(routes::global::not_found)
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(SentryHttpLayer::new().enable_transaction())
                .layer(TraceLayer::new_for_http())
                .layer(Extension(auth_config))
                .layer(Extension(seaorm_pool)),
        )
        .with_state(());
    Ok(app)
}
