use leptos::prelude::*;

use crate::disclosure::DisclosureList;

/// One disclosure item of `list`.
///
/// The summary button is always rendered; the body follows the item's state
/// in `list`. Works the same wherever it is embedded.
#[component]
pub fn Details(
    idx: usize,
    list: RwSignal<DisclosureList>,
    /// Section-specific class, also used to build the body id.
    class: &'static str,
    summary: &'static str,
    #[prop(optional)] icon: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let expanded = move || list.with(|l| l.is_expanded(idx));
    let body_id = format!("{class}-{idx}-body");

    view! {
        <div class=format!("details {class}") class:open=expanded data-idx=idx.to_string()>
            <button
                type="button"
                class="summary"
                aria-controls=body_id.clone()
                aria-expanded=move || if expanded() { "true" } else { "false" }
                on:click=move |_| {
                    list.update(|l| {
                        l.toggle(idx);
                    })
                }
            >
                {icon.map(|src| view! { <img src=src alt="" width="32" height="32" class="icon" /> })}
                <span>{summary}</span>
            </button>
            <div
                id=body_id
                class="body"
                data-state=move || if expanded() { "open" } else { "closed" }
                hidden=move || !expanded()
            >
                {children()}
            </div>
        </div>
    }
}
