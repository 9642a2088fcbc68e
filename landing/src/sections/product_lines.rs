use leptos::prelude::*;

use super::{Accelerate, Innovate, NoCodeSplash, Pioneer};

/// The product showcase: splash, Accelerate, Innovate and Pioneer.
#[component]
pub fn ProductLines() -> impl IntoView {
    view! {
        <section id="product-lines">
            <NoCodeSplash />
            <Accelerate />
            <Innovate />
            <Pioneer />
        </section>
    }
}
