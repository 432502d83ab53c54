//! Trademark results desktop — Dioxus front end over `trademarks-core`.

use std::sync::Mutex;

use dioxus::prelude::*;
use trademarks_core::ClientConfig;

mod app;
mod results;
mod state;

use app::App;

/// Pre-runtime storage — loaded before Dioxus launches, read by every fetch.
pub static INITIAL_CONFIG: Mutex<Option<ClientConfig>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trademarks_core=info,trademarks_desktop=info")),
        )
        .with_target(false)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let config = trademarks_core::load_config(&cwd);
    tracing::info!(base_url = config.base_url.as_str(), "Starting trademark results");
    if let Ok(mut slot) = INITIAL_CONFIG.lock() {
        *slot = Some(config);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Trademarkia")
                            .with_inner_size(LogicalSize::new(1200.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(720.0, 480.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
