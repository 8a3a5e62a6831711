use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use calc::CalcModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::{AppConfig, redact_dsn_password};
use crate::signals::wait_for_shutdown;

/// Opens the database pool. Failing here aborts startup.
///
/// # Errors
/// Returns an error if the DSN is invalid or the database is unreachable.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection> {
    let url = config.database.connection_url()?;
    tracing::info!(dsn = %redact_dsn_password(&url)?, "Connecting to database");

    Database::connect(connect_options(config, url))
        .await
        .context("failed to connect to database")
}

/// An in-memory `SQLite` database lives only as long as its connection, so the
/// pool must never close the last one.
const IN_MEMORY_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

fn connect_options(config: &AppConfig, url: String) -> ConnectOptions {
    let in_memory = url.starts_with("sqlite::memory:") || url.contains("mode=memory");

    let mut opts = ConnectOptions::new(url);
    opts.max_connections(config.database.max_conns)
        .acquire_timeout(Duration::from_millis(config.database.acquire_timeout_ms))
        .sqlx_logging(false);
    if in_memory {
        opts.min_connections(1).max_lifetime(IN_MEMORY_LIFETIME);
    }
    opts
}

/// Wires the calc module into an HTTP router with request tracing.
pub fn build_router(module: &CalcModule) -> Router {
    apply_trace_layer(module.register_rest(Router::new()))
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    path = %req.uri().path(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency_ms);
                    tracing::info!(status = res.status().as_u16(), latency_ms, "request completed");
                },
            ),
    )
}

/// Connects, migrates, and serves until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if startup fails or the listener stops unexpectedly.
pub async fn run(config: AppConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    let db = connect(&config).await?;

    let module = CalcModule::new(db, &config.calc);
    if config.database.run_migrations {
        module.migrate().await?;
    }
    let router = build_router(&module);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    let shutdown = async {
        if let Err(e) = wait_for_shutdown().await {
            tracing::error!(error = %e, "signal handling failed, shutting down");
        }
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated")?;

    tracing::info!("Calc server stopped");
    Ok(())
}
