//! Taproom application library
//!
//! Wires the catalogue modules into the kernel lifecycle and the HTTP server.

pub mod modules;

use anyhow::Context;
use taproom_kernel::{settings::Settings, InitCtx, ModuleRegistry};

/// Registry holding every application module
pub fn build_registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    registry
}

/// Run the service until a shutdown signal arrives
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let registry = build_registry();
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    let served = taproom_http::start_server(&registry, &settings).await;

    registry
        .stop_all()
        .await
        .context("module shutdown failed")?;
    served
}
