use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::{FOOTER_COLUMNS, LEGAL_LINKS, LinkGroup};

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let logo_alt = format!("{} Logo", config.site.brand);

    view! {
        <footer class="footer bg-[#1c1c1c] text-white pt-16 pb-24 flex flex-col gap-20">
            <div class="safe-viewport">
                <div class="footer-columns grid grid-cols-4">
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    {column
                                        .groups
                                        .iter()
                                        .map(|group| view! { <LinkList group=*group /> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="flex flex-row items-center justify-between">
                    <img src="/logo.svg" alt=logo_alt class="svg-white" width="156" height="44" />
                    <div class="uppercase flex flex-row gap-36 text-base font-semibold">
                        {LEGAL_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.href>{link.label}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkList(group: LinkGroup) -> impl IntoView {
    view! {
        <div class="link-group">
            <h4 class="uppercase font-black text-2xl mb-5">{group.heading}</h4>
            <ul class="mb-10 flex flex-col gap-2.5">
                {group
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href class="text-base text-white">{link.label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
