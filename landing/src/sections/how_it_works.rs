use leptos::prelude::*;

use super::StatBlock;
use crate::content::SECURITY_STATS;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="safe-viewport py-32">
            <h2 class="section-heading mb-16">"How It Works"</h2>
            <div>
                <div class="w-full max-w-[85rem] mx-auto rounded-3xl aspect-[1360/760] bg-gray-200"></div>
            </div>
            <div class="pt-40 pb-16 w-full max-w-[85rem] mx-auto flex flex-row justify-between">
                <blockquote class="quote">
                    <p>"BY THE PEOPLE."</p>
                    <p>"FOR THE PEOPLE."</p>
                </blockquote>
                <div class="px-12 py-14 bg-gray-50 rounded-3xl max-w-[44.75rem]">
                    <p class="text-3xl font-normal leading-normal uppercase">
                        "A Decentralised compute cloud like no other."
                    </p>
                    <p class="text-2xl font-black mb-4">"Secured by"</p>
                    <div class="flex flex-row gap-9">
                        {SECURITY_STATS
                            .iter()
                            .map(|stat| view! { <StatBlock stat=*stat /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
            <div>
                <div class="w-full max-w-[85rem] mx-auto rounded-3xl aspect-[1360/760] bg-gray-200"></div>
            </div>
            <div class="text-center pt-32">
                <a href="#" class="btn btn-lg bg-primary text-black uppercase">"Provide Compute"</a>
            </div>
        </section>
    }
}
