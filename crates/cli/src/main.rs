use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use taproom_kernel::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "taproom", version, about = "Beer catalogue service")]
struct Cli {
    /// Directory holding `base.toml` and the per-environment overlays
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print the OpenAPI document
    Openapi {
        /// Write the document to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the effective settings as JSON
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config_dir.as_deref())?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            taproom_telemetry::init(&settings.telemetry)?;
            tracing::info!(
                env = ?settings.environment,
                address = %settings.server.bind_address(),
                "taproom starting"
            );
            taproom_app::run(settings).await
        }
        Command::Openapi { output } => {
            let registry = taproom_app::build_registry();
            let document = taproom_http::openapi_document(&registry)
                .to_pretty_json()
                .context("failed to render OpenAPI document")?;
            match output {
                Some(path) => std::fs::write(&path, document)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{document}"),
            }
            Ok(())
        }
        Command::Config => {
            let rendered = serde_json::to_string_pretty(&settings)
                .context("failed to render settings")?;
            println!("{rendered}");
            Ok(())
        }
    }
}

fn load_settings(config_dir: Option<&Path>) -> anyhow::Result<Settings> {
    match config_dir {
        Some(dir) => {
            let environment =
                std::env::var("TAPROOM_ENV").unwrap_or_else(|_| "local".to_string());
            Settings::load_from(dir, &environment)
        }
        None => Settings::load(),
    }
    .context("failed to load taproom settings")
}
