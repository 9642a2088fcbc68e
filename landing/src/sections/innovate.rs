// Product lines, part two: capabilities, the code sample and use cases.
use std::time::Duration;

use leptos::prelude::*;
use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use super::{Details, DotBackground, RightArrow};
use crate::config::SiteConfig;
use crate::content::{
    CAPABILITIES, CODE_SAMPLE, CODE_SAMPLE_NOTES, COMMUNITY_AVATARS, FEATURED_USE_CASE,
    FEATURED_USE_CASE_COPY, FEATURED_USE_CASE_TAGS, USE_CASES,
};
use crate::disclosure::DisclosureList;

#[component]
pub fn Innovate() -> impl IntoView {
    view! {
        <div id="innovate" class="relative">
            <DotBackground dot_color="#afd153" bg_color="#d0f964" />
            <div class="safe-viewport">
                <div class="pt-[245px] py-[156px] grid grid-cols-12">
                    <header class="col-span-6 col-start-3 flex flex-col items-center">
                        <h2 class="text-[3.5rem] font-black uppercase rounded-3xl px-16 py-10 bg-white inline-block">
                            "Innovate"
                        </h2>
                        <p class="font-medium text-[2rem] text-black mt-10">
                            "Scale your idea with prebuilt blueprints in minutes"
                        </p>
                    </header>
                </div>
                <div class="grid grid-cols-12">
                    <div class="col-span-10 rounded-3xl bg-white overflow-hidden px-20 py-14">
                        <h4 class="text-4xl font-black text-blackAlpha-900 uppercase max-w-[60%] text-center mx-auto">
                            "Access the unique functionalities in Phat Contract"
                        </h4>
                        <CapabilityTabs />
                        <div class="grid grid-cols-12 gap-10">
                            <div class="col-span-8">
                                <CodeViewer code=CODE_SAMPLE />
                            </div>
                            <div class="col-span-4 flex flex-col gap-5 h-full justify-center text-blackAlpha-700">
                                {CODE_SAMPLE_NOTES
                                    .iter()
                                    .map(|note| view! { <p>{*note}</p> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    </div>
                    <div class="col-span-10 flex flex-row justify-center mt-16 mb-36">
                        <a href="#" class="btn btn-lg bg-secondary text-white uppercase w-[21.67vw]">"Docs"</a>
                    </div>
                </div>
                <UseCases />
                <ChatWithUs />
            </div>
        </div>
    }
}

#[component]
fn CapabilityTabs() -> impl IntoView {
    view! {
        <div class="py-14">
            <ul class="capability-tabs flex flex-row gap-2.5">
                {CAPABILITIES
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        let class = if i == 0 {
                            "btn btn-lg bg-primary border border-solid border-primary text-black uppercase text-xs"
                        } else {
                            "btn btn-lg bg-white border border-solid border-[#CBD5E0] text-blackAlpha-500 uppercase text-xs"
                        };
                        view! {
                            <li>
                                <button type="button" class=class>{*label}</button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// How long the copy button reads "copied".
const COPIED_FOR: Duration = Duration::from_millis(2000);

/// The page's clipboard, if it has one. Outside a secure context
/// `navigator.clipboard` is `undefined`.
fn clipboard_of(navigator: &web_sys::Navigator) -> Option<web_sys::Clipboard> {
    let clipboard = navigator.clipboard();
    (!clipboard.is_undefined()).then_some(clipboard)
}

/// Schedule `reset`, dropping whatever reset `slot` still holds.
fn restart_timeout(
    slot: StoredValue<Option<TimeoutHandle>>,
    reset: impl FnOnce() + 'static,
    delay: Duration,
) {
    if let Some(pending) = slot.get_value() {
        pending.clear();
    }
    match set_timeout_with_handle(reset, delay) {
        Ok(handle) => slot.set_value(Some(handle)),
        Err(e) => tracing::debug!(error = ?e, "copy feedback timer unavailable"),
    }
}

/// Code sample in a window frame with a copy-to-clipboard button.
#[component]
pub fn CodeViewer(code: &'static str) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let reset = StoredValue::new(None::<TimeoutHandle>);

    let copy_code = move |_| {
        let Some(clipboard) = web_sys::window().and_then(|w| clipboard_of(&w.navigator())) else {
            tracing::debug!("no clipboard, copy skipped");
            return;
        };
        let write = JsFuture::from(clipboard.write_text(code));
        spawn_local(async move {
            match write.await {
                Ok(_) => {
                    set_copied.set(true);
                    restart_timeout(reset, move || set_copied.set(false), COPIED_FOR);
                }
                Err(e) => tracing::debug!(error = ?e, "clipboard write rejected"),
            }
        });
    };

    view! {
        <div class="code-viewer">
            <header class="flex flex-row justify-between items-center">
                <div class="flex flex-row gap-2.5">
                    <div class="rounded-full bg-[#D9D9D9] w-4 h-4"></div>
                    <div class="rounded-full bg-[#D9D9D9] w-4 h-4"></div>
                    <div class="rounded-full bg-[#D9D9D9] w-4 h-4"></div>
                </div>
                <button type="button" class="code-copy-btn" aria-label="Copy code" on:click=copy_code>
                    <img src="/icons/copy.svg" width="24" height="24" alt="" class="svg-gray-400" />
                    <span class="code-copy-label">{move || if copied.get() { "copied" } else { "copy" }}</span>
                </button>
            </header>
            <main class="py-8 px-0.5">
                <pre class="font-mono text-xs whitespace-pre-wrap">{code}</pre>
            </main>
        </div>
    }
}

#[component]
fn UseCases() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let list = RwSignal::new(DisclosureList::new(
        config.disclosure.use_cases,
        USE_CASES.iter().map(|u| u.idx),
    ));

    view! {
        <div class="grid grid-cols-12">
            <div class="col-span-10 flex flex-row gap-6">
                <div class="max-w-md flex flex-col gap-5">
                    <ul class="use-cases flex flex-col gap-5">
                        {USE_CASES
                            .iter()
                            .map(|use_case| {
                                view! {
                                    <li>
                                        <Details
                                            idx=use_case.idx
                                            list=list
                                            class="blueprint-details"
                                            summary=use_case.summary
                                        >
                                            <p>{use_case.body}</p>
                                        </Details>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                    <div class="flex-1 rounded-lg px-7 py-6 bg-secondary flex flex-row items-center justify-center gap-14">
                        <div>
                            <img src="/icons/excalmatory-mark.svg" alt="" width="50" height="128" class="svg-white" />
                        </div>
                        <div class="text-white font-black flex flex-col gap-6 leading-none">
                            <div class="text-[3.5rem]">"$50K"</div>
                            <div class="uppercase text-xl">"for innovators"</div>
                        </div>
                    </div>
                </div>
                <FeaturedUseCase />
            </div>
            <div class="col-span-10 col-start-4 mt-16 pl-12">
                <a href="#" class="btn btn-xl bg-secondary text-white font-bold uppercase">
                    "Explore awesome-phat-contract"
                </a>
            </div>
        </div>
    }
}

#[component]
fn FeaturedUseCase() -> impl IntoView {
    view! {
        <div class="flex-1">
            <div class="featured-use-case rounded-3xl overflow-hidden bg-white">
                <div class="aspect-[946/487] bg-[#cecece]"></div>
                <div class="px-12 py-8">
                    <header class="flex flex-row gap-8 items-center">
                        <h3 class="text-2xl font-black uppercase">{FEATURED_USE_CASE}</h3>
                        <ul class="flex flex-row gap-4">
                            {FEATURED_USE_CASE_TAGS
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <li class="text-secondary text-xs uppercase px-6 py-2.5 bg-gray-100 rounded-[6px]">
                                            {*tag}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </header>
                    <main class="mt-6 mb-12 flex flex-col gap-2 text-base text-blackAlpha-700">
                        {FEATURED_USE_CASE_COPY
                            .iter()
                            .map(|para| view! { <p>{*para}</p> })
                            .collect::<Vec<_>>()}
                    </main>
                    <footer>
                        <a
                            href="#"
                            class="btn bg-secondary text-white uppercase inline-flex flex-row justify-between px-5 py-3 w-[16rem]"
                        >
                            <span class="text-lg font-bold">"Try Now"</span>
                            <RightArrow class="svg-white" />
                        </a>
                    </footer>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ChatWithUs() -> impl IntoView {
    view! {
        <div class="section-chat-with-us py-40">
            <header class="text-5xl font-black uppercase leading-normal">
                <h3>"Develop and explore" <br /> " your ideas with us"</h3>
            </header>
            <div class="chat-body">
                <ul>
                    {COMMUNITY_AVATARS
                        .iter()
                        .map(|avatar| view! { <li><img src=avatar.src alt=avatar.name /></li> })
                        .collect::<Vec<_>>()}
                </ul>
                <span class="text-4xl font-normal leading-normal uppercase text-black">"Chat Now!"</span>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    #[wasm_bindgen_test]
    fn undefined_clipboard_is_none() {
        let navigator: web_sys::Navigator = js_sys::Object::new().unchecked_into();
        assert!(clipboard_of(&navigator).is_none());
    }

    #[wasm_bindgen_test]
    async fn second_copy_restarts_the_reset() {
        let slot = StoredValue::new(None::<TimeoutHandle>);
        let fired = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let fired = Rc::clone(&fired);
            restart_timeout(slot, move || fired.set(fired.get() + 1), Duration::from_millis(10));
        }

        sleep(60).await;
        assert_eq!(fired.get(), 1);
    }
}
