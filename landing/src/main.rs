// Phala Network landing page - Leptos 0.8 CSR entry point
// Developed by the Phala Network web team (c)2025

use leptos::prelude::*;
use phala_landing::App;
use phala_landing::config::SiteConfig;
use phala_landing::telemetry;

fn main() {
    console_error_panic_hook::set_once();

    let parsed = SiteConfig::embedded();
    let config = parsed.as_ref().cloned().unwrap_or_default();
    telemetry::init(config.logging.level());
    if let Err(e) = parsed {
        tracing::warn!(error = %e, "site.toml ignored, using defaults");
    }

    tracing::info!("phala-landing v{} mounting", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
