//! PokeDream Engine - Main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use pokedream_engine::{App, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Logs go to stderr; stdout carries the JSON result only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedream_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = cli::Command::parse(std::env::args().skip(1))?;

    let config = EngineConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let app = App::from_config(&config).await?;
    let output = cli::run(&app, command).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
