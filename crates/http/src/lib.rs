//! HTTP server facade for taproom with Axum, error handling, validation and OpenAPI support.

use anyhow::Context;
use axum::{routing::get, Router};
use utoipa::OpenApi;

use taproom_kernel::{settings::Settings, ModuleRegistry};

pub mod error;
pub mod router;
pub mod validation;

use error::{ErrorBody, ErrorResponse};
use router::RouterBuilder;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taproom API",
        version = "1.0.0",
        description = "Beer catalogue service"
    ),
    paths(health_check),
    components(schemas(ErrorResponse, ErrorBody))
)]
struct CoreApi;

/// Start the HTTP server with the given module registry
pub async fn start_server(registry: &ModuleRegistry, settings: &Settings) -> anyhow::Result<()> {
    let address = settings.server.bind_address();
    tracing::info!("starting HTTP server on {}", address);

    let app = build_router(registry, settings);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind to {address}"))?;

    tracing::info!("HTTP server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Build the main HTTP router with all module routes mounted
pub fn build_router(registry: &ModuleRegistry, settings: &Settings) -> Router {
    let mut router_builder = RouterBuilder::new().route("/healthz", get(health_check));

    for module in registry.modules() {
        router_builder = router_builder.mount_module(module.name(), module.routes());
    }

    router_builder
        .with_openapi(openapi_document(registry))
        .with_fallback()
        .with_tracing()
        .with_cors()
        .with_request_id()
        .with_timeout(settings.server.request_timeout_ms)
        .build()
}

/// Merge the core document with every module's fragment
pub fn openapi_document(registry: &ModuleRegistry) -> utoipa::openapi::OpenApi {
    let mut document = CoreApi::openapi();

    for module in registry.modules() {
        if let Some(fragment) = module.openapi() {
            tracing::debug!(module = module.name(), "merging OpenAPI fragment");
            document.merge(fragment);
        }
    }

    document
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = String))
)]
async fn health_check() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
