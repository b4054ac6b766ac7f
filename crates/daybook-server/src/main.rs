use crate::app::AuthConfig;
use crate::opt::{Commands, Run};
use anyhow::{Context, Result};
use axum::routing::get;
use axum::serve;
use axum_prometheus::PrometheusMetricLayerBuilder;
use chrono::TimeDelta;
use clap::Parser;
use daybook_utils::net::create_listener;
use daybook_utils::tracing::TracingConfig;

mod app;
mod auth;
mod db;
mod opt;
mod password;
mod routes;
mod user;

fn lifetime(seconds: i64) -> Result<TimeDelta> {
    TimeDelta::try_seconds(seconds).with_context(|| format!("token lifetime of {seconds}s is out of range"))
}

async fn run(opt: Run) -> Result<()> {
    let guard = daybook_utils::tracing::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn)
            .env(opt.env)
            .build(),
    )?;
    tracing::debug!(sentry = guard.sentry_enabled(), "tracing initialized");

    let seaorm_pool = db::connect(&opt.db, &opt.database_url).await?;

    let auth_config = AuthConfig::new(
        opt.auth.secret_key.as_bytes(),
        lifetime(opt.auth.access_token_lifetime)?,
        lifetime(opt.auth.refresh_token_lifetime)?,
    );
    let app = app::create_app(auth_config, &opt.auth.origins, opt.deletable, seaorm_pool)?;

    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("daybook")
        .with_default_metrics()
        .build_pair();
    let app = app
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer);

    let listener = create_listener(opt.host, opt.port).await?;

    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = &error as &dyn std::error::Error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

fn main() -> Result<()> {
    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
