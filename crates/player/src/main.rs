//! HeroSheet Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use herosheet_domain::OptionCatalogs;
use herosheet_player::RunnerConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "herosheet_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = RunnerConfig::from_env();
    tracing::info!(shell = ?config.shell, title = %config.title, "Starting HeroSheet Player");

    match serde_json::to_string(&OptionCatalogs::get()) {
        Ok(json) => tracing::debug!(catalogs = %json, "Loaded option catalogs"),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize option catalogs"),
    }

    herosheet_player::run(config);
}
