use leptos::prelude::*;

use super::{Details, DotBackground};
use crate::config::SiteConfig;
use crate::content::FEATURE_HIGHLIGHTS;
use crate::disclosure::DisclosureList;

#[component]
pub fn Features() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let list = RwSignal::new(DisclosureList::new(
        config.disclosure.features,
        FEATURE_HIGHLIGHTS.iter().map(|f| f.idx),
    ));

    view! {
        <section id="features" class="relative h-screen">
            <DotBackground dot_color="#E2E8F0" bg_color="#F7FAFC" />
            <div class="safe-viewport flex flex-col h-full justify-end pb-16">
                <div class="grid grid-cols-2 w-full">
                    <div>
                        <header class="uppercase pt-14 pb-28">
                            <h2 class="font-black text-5xl leading-normal">"Smart Contracts."</h2>
                            <h3 class="text-6xl leading-normal">"Now Smarter."</h3>
                            <p class="text-base text-blackAlpha-700 leading-relaxed mt-6">
                                "Phat Contract is the offchain program running on Phala Network."
                            </p>
                        </header>
                        <div class="flex flex-row gap-10">
                            <div class="flex flex-col">
                                <div class="w-1.5 rounded-lg bg-blackAlpha-100 flex-1"></div>
                            </div>
                            <div class="feature-highlights flex-1 flex flex-col gap-1">
                                {FEATURE_HIGHLIGHTS
                                    .iter()
                                    .map(|feature| {
                                        view! {
                                            <Details
                                                idx=feature.idx
                                                list=list
                                                class="feature-highlight-item"
                                                summary=feature.summary
                                                icon=feature.icon
                                            >
                                                <p>{feature.body}</p>
                                            </Details>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    </div>
                    <div class="block rounded-5xl bg-gray-200 aspect-[834/782] relative overflow-hidden">
                        <img src="/home/features.jpg" alt="" class="object-fill" />
                    </div>
                </div>
            </div>
        </section>
    }
}
