// Small building blocks shared by several sections
use leptos::prelude::*;

use crate::content::Stat;

/// Dotted backdrop behind a section.
#[component]
pub fn DotBackground(dot_color: &'static str, bg_color: &'static str) -> impl IntoView {
    let style = format!(
        "background-color: {bg_color}; \
         background-image: radial-gradient({dot_color} 2px, {bg_color} 2px); \
         background-size: 56px 56px;"
    );
    view! {
        <div
            class="absolute inset-0 -z-10 h-full w-full cursor-none pointer-events-none"
            style=style
        ></div>
    }
}

#[component]
pub fn StatBlock(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat">
            <h4 class="text-lg font-semibold">{stat.value}</h4>
            <div class="text-sm text-blackAlpha-700">{stat.name}</div>
        </div>
    }
}

#[component]
pub fn RightArrow(
    /// Color utility, e.g. `svg-black`.
    class: &'static str,
    #[prop(default = 16)] size: u32,
) -> impl IntoView {
    view! {
        <img
            src="/icons/right-arrow.svg"
            alt=""
            class=class
            width=size.to_string()
            height=size.to_string()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn dot_background_uses_56px_grid() {
        let html = view! { <DotBackground dot_color="#2b2b2b" bg_color="#333" /> }.to_html();
        assert!(html.contains("radial-gradient(#2b2b2b 2px, #333 2px)"), "{html}");
        assert!(html.contains("background-size: 56px 56px;"), "{html}");
    }
}
