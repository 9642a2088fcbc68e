use leptos::prelude::*;

use super::{RightArrow, SiteNav, StatBlock};
use crate::config::SiteConfig;
use crate::content::{NETWORK_LOGOS, NETWORK_STATS};

#[component]
pub fn Hero() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <section id="hero" class="relative max-h-screen w-full">
            <div class="background absolute top-0 left-0 w-full min-h-full z-[-1] select-none pointer-events-none">
                <img src="/home/bg-first-screen.jpg" alt="" class="aspect-[3840/1980] object-cover" />
            </div>
            <div class="flex flex-col h-screen justify-between items-center">
                <div class="w-full">
                    <SiteNav />
                </div>

                <div class="uppercase text-center flex flex-col gap-16 justify-center">
                    <header>
                        <h2 class="text-4xl font-normal text-[#222] leading-10 mb-2.5">
                            "Computation as it's meant to be"
                        </h2>
                        <h3 class="text-2xl font-black">
                            "On-Chain verification. Off-Chain "
                            <span class="text-[#8544F6]">"Capability."</span>
                        </h3>
                    </header>
                    <div class="flex flex-row gap-5 mx-auto">
                        <a class="btn btn-xl text-base bg-[#CDFA50] text-black" href="#features">
                            "Let's Build!"
                        </a>
                        <a class="btn btn-xl text-base bg-white text-black" href=config.site.community_url>
                            "Join Community"
                        </a>
                    </div>
                </div>

                <div class="safe-viewport mb-6">
                    <div class="flex flex-row justify-between">
                        <NetworkStats />
                        <div class="flex flex-col gap-2 items-end">
                            <div class="flex flex-row gap-5">
                                {NETWORK_LOGOS
                                    .iter()
                                    .map(|src| view! { <img src=*src alt="" width="65" height="65" /> })
                                    .collect::<Vec<_>>()}
                            </div>
                            <a href="#" class="flex flex-row gap-2">
                                <span class="text-sm">"View All Supported Networks"</span>
                                <RightArrow class="svg-secondary" />
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn NetworkStats() -> impl IntoView {
    view! {
        <div class="network-stats flex flex-row gap-5 items-center">
            <img
                src="/icons/gear.svg"
                alt=""
                class="svg-black mr-2.5 motion-safe:animate-spin"
                width="37"
                height="37"
            />
            {NETWORK_STATS
                .iter()
                .map(|stat| view! { <StatBlock stat=*stat /> })
                .collect::<Vec<_>>()}
        </div>
    }
}
