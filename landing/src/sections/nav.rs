use leptos::prelude::*;

use super::RightArrow;
use crate::config::SiteConfig;
use crate::content::NAV_LINKS;

#[component]
pub fn SiteNav() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let logo_alt = format!("{} Logo", config.site.brand);

    view! {
        <div class="site-nav safe-viewport flex flex-row items-center justify-between py-6">
            <img src="/logo.svg" alt=logo_alt class="svg-black-100" width="156" height="44" />
            <nav class="flex flex-row gap-[3.75rem]">
                {NAV_LINKS
                    .iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.href
                                class="text-base font-normal hover:border-b hover:border-solid hover:border-b-[#262626]"
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="w-full max-w-[9.375rem]">
                <a
                    href=config.site.app_url
                    class="btn bg-blackAlpha-800 text-sm text-primary py-3 px-5 w-full flex flex-row justify-between items-center"
                >
                    <span>"APP"</span>
                    <RightArrow class="svg-primary" />
                </a>
            </div>
        </div>
    }
}
