// Product lines, part one: the "no code to full code" splash and the
// blueprint marketplace.
use leptos::prelude::*;

use super::{DotBackground, RightArrow};
use crate::content::{BLUEPRINT_STEPS, BLUEPRINTS, BlueprintCard};

#[component]
pub fn NoCodeSplash() -> impl IntoView {
    view! {
        <div class="no-code-splash relative h-screen">
            <DotBackground dot_color="#E2E8F0" bg_color="#F7FAFC" />
            <div class="absolute top-[33%] right-0 h-[57%] w-[67.45vw] bg-primary rounded-l-[48px] -z-[9]"></div>
            <div class="safe-viewport flex flex-row items-center h-full gap-16">
                <header class="flex flex-col gap-6 z-10 max-w-[50vw]">
                    <div class="text-[2.625rem]">"FROM"</div>
                    <div>
                        <h3 class="text-[5.625rem] font-black text-white bg-black rounded-3xl inline-flex px-14">
                            "NO CODE"
                        </h3>
                    </div>
                    <div class="flex flex-row gap-6 items-center -ml-24">
                        <img src="/icons/long-right-arrow.svg" class="svg-secondary" alt="" width="234" height="101" />
                        <h3 class="text-[5.625rem] font-black text-white bg-black rounded-3xl inline-flex px-14">
                            "FULL CODE"
                        </h3>
                    </div>
                    <h4 class="text-[2.625rem] uppercase ml-[160px]">
                        "We got you " <span class="font-black">"covered"</span> "."
                    </h4>
                </header>
                <div class="relative w-[300px] h-[420px]">
                    <img
                        src="/home/experience-front.jpg"
                        alt=""
                        width="292"
                        height="419"
                        class="rounded-3xl overflow-hidden absolute left-[260px] top-[-100px] z-20"
                    />
                    <img
                        src="/home/experience-back.jpg"
                        alt=""
                        width="292"
                        height="419"
                        class="rounded-3xl overflow-hidden absolute left-0 top-[100px] z-10"
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Accelerate() -> impl IntoView {
    view! {
        <div id="accelerate" class="relative">
            <DotBackground dot_color="#6b3eca" bg_color="#7f4af0" />
            <div class="safe-viewport">
                <header class="pt-[27.78vh]">
                    <h2 class="text-[3.5rem] font-black uppercase rounded-3xl px-14 bg-white inline-block">
                        "Accelerate"
                    </h2>
                    <p class="font-medium text-[2rem] text-white mt-8 ml-28">
                        "Scale your idea with prebuilt blueprints in minutes"
                    </p>
                </header>
                <BlueprintWorkflow />
                <BlueprintMarketplace />
                <div class="py-32 grid grid-cols-12 w-full">
                    <div class="flex flex-col gap-10 col-span-7 col-start-6">
                        <h3 class="uppercase text-white text-[56px] font-black">
                            "Inspire" <br /> " the next blueprint"
                        </h3>
                        <div>
                            <a href="#" class="btn btn-xl bg-primary text-black uppercase">
                                "Propose now"
                                <RightArrow class="svg-black ml-5" />
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Screenshot plus the Pick / Config / Deploy / Integrate steps.
#[component]
fn BlueprintWorkflow() -> impl IntoView {
    view! {
        <div class="mt-36 w-full flex flex-row justify-end">
            <div class="max-w-[64.58vw]">
                <div class="rounded-3xl overflow-hidden flex flex-row bg-white">
                    <div>
                        <img src="/home/bricks-screenshot.jpg" width="879" height="620" alt="" />
                    </div>
                    <div class="flex flex-col justify-between px-8 py-10 max-w-[18.75vw]">
                        <div>
                            <h4 class="text-3xl font-black mb-5">"Pick"</h4>
                            <div class="text-sm text-blackAlpha-700 leading-relaxed">
                                <p>"Blueprints: "</p>
                                <p>
                                    "An evergrowing community driven marketplace of one-click deployable Phat Contracts to scale your DApp"
                                </p>
                            </div>
                        </div>
                        <ul class="blueprint-steps flex flex-col gap-2.5">
                            {BLUEPRINT_STEPS
                                .iter()
                                .enumerate()
                                .map(|(i, step)| {
                                    let class = if i == 0 {
                                        "btn bg-primary font-bold block border border-blackAlpha-100 border-solid"
                                    } else {
                                        "btn block border border-blackAlpha-100 border-solid"
                                    };
                                    view! {
                                        <li>
                                            <a href="#" class=class>{*step}</a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
                <div class="mt-8">
                    <a href="#" class="flex-row flex items-center text-white rounded-xl bg-[#6C37C9] py-5 px-10 max-w-[879px]">
                        <span class="text-lg font-bold uppercase">"Get your own lens api oracle now"</span>
                        <RightArrow class="svg-white ml-5 inline-block" size=24 />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn BlueprintMarketplace() -> impl IntoView {
    view! {
        <div class="blueprint-marketplace bg-white rounded-3xl max-w-[75rem] p-16 mt-[170px]">
            <header class="mb-16">
                <h3 class="text-4xl text-blackAlpha-900 font-black uppercase">"Explore all of our blueprints"</h3>
                <p class="text-xl text-blackAlpha-700">"Vote on the blueprint you'd like to see next!"</p>
            </header>
            <div class="grid grid-cols-2 gap-5">
                {BLUEPRINTS
                    .iter()
                    .map(|card| view! { <BlueprintCardView card=*card /> })
                    .collect::<Vec<_>>()}
            </div>
            <a
                href="#"
                class="btn btn-lg bg-primary mt-10 text-lg font-bold uppercase flex flex-row items-center py-5 px-10"
            >
                "Learn about blueprints"
                <RightArrow class="svg-black ml-5 inline-block" size=24 />
            </a>
        </div>
    }
}

#[component]
fn BlueprintCardView(card: BlueprintCard) -> impl IntoView {
    view! {
        <div class="blueprint-card w-full aspect-[526/270] bg-[#333] rounded-xl overflow-hidden p-8 relative">
            <div class="flex flex-col justify-between h-full z-10 relative max-w-[60%]">
                <div class="flex flex-col gap-6">
                    <h4 class="text-2xl text-white font-black uppercase">{card.title}</h4>
                    <div class="text-base text-whiteAlpha-700 leading-normal">{card.blurb}</div>
                </div>
                {card.live.then(|| view! {
                    <div class="blueprint-live flex flex-row items-center gap-3.5">
                        <img src="/icons/gear.svg" alt="" width="32" height="32" class="svg-primary" />
                        <span class="text-primary text-base font-extrabold">"LIVE !"</span>
                    </div>
                })}
            </div>
            {card.illustration.map(|src| view! {
                <img
                    src=src
                    alt=""
                    width="250"
                    height="250"
                    class="absolute top-[25%] right-[-1%] z-0 opacity-50"
                />
            })}
        </div>
    }
}
