//! # phala-landing
//!
//! The Phala Network landing page, built with [Leptos](https://leptos.dev/) 0.8.
//!
//! In the browser the page is mounted client-side (see `main.rs`, served by
//! Trunk). The same component tree renders to an HTML string natively with
//! [`render_page`], which prerendering and the integration tests use.
//!
//! ## Layout
//!
//! ```text
//! App
//! ├── Hero            nav, headline, network stats
//! ├── Features        four disclosure items
//! ├── ProductLines    splash, Accelerate, Innovate (use-case disclosures), Pioneer
//! ├── HowItWorks
//! ├── Highlights
//! ├── Subscription    newsletter form
//! └── Footer
//! ```
//!
//! ## Modules
//!
//! - [`disclosure`] - open/closed state behind the expandable lists
//! - [`content`] - page copy and link tables
//! - [`forms`] - validation and the pluggable submission sink
//! - [`config`] - `site.toml` settings
//! - [`telemetry`] - `tracing` output to the browser console
//!
//! ---
//!
//! Developed by the Phala Network web team (c)2025

pub mod config;
pub mod content;
pub mod disclosure;
pub mod error;
pub mod forms;
pub mod sections;
pub mod telemetry;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use config::SiteConfig;
use forms::FormSinkHandle;
use sections::*;

/// The whole page.
///
/// Provides `config` to every section through context. A [`FormSinkHandle`]
/// already in context (from an embedding app) is kept; otherwise the logging
/// sink is installed.
#[component]
pub fn App(#[prop(optional)] config: SiteConfig) -> impl IntoView {
    if use_context::<FormSinkHandle>().is_none() {
        provide_context(FormSinkHandle::default());
    }
    provide_context(config);

    view! {
        <Hero />
        <main>
            <Features />
            <ProductLines />
            <HowItWorks />
            <Highlights />
            <Subscription />
        </main>
        <Footer />
    }
}

/// Render the page to a complete HTML document.
///
/// # Example
///
/// ```rust
/// use phala_landing::{config::SiteConfig, render_page};
///
/// let html = render_page(&SiteConfig::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_page(config: &SiteConfig) -> String {
    let title = format!("{} Network - Computation as it's meant to be", config.site.brand);
    let config = config.clone();

    let owner = Owner::new();
    let html = owner.with(move || {
        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <title>{title}</title>
                </head>
                <body>
                    <App config=config />
                </body>
            </html>
        }
        .to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}
