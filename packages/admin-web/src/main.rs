//! Multigremial admin console
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! API_URL=https://api.multigremial.cl dx build --release --features web
//! ```

#![allow(non_snake_case)]

use multigremial_admin::{config, App};

fn main() {
    // In the browser the launcher installs its own tracing logger and the
    // API URL is fixed at build time
    #[cfg(not(target_arch = "wasm32"))]
    {
        init_tracing();
        if let Ok(url) = std::env::var("API_URL") {
            config::init_api_url(url);
        }
    }

    tracing::info!(api_url = config::api_url(), "Starting admin console");
    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("multigremial_admin=debug,info")),
        )
        .init();
}
