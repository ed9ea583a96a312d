use anyhow::Context;
use taproom_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load taproom settings")?;
    taproom_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        address = %settings.server.bind_address(),
        "taproom-app bootstrap starting"
    );

    taproom_app::run(settings).await
}
