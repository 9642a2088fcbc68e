// Product lines, part three: research areas and the contact form.
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::DotBackground;
use crate::content::{
    AREA_OF_INTEREST, AREA_OF_INTEREST_COPY, RESEARCH_AREAS, RESEARCH_JOIN_SLOT, ResearchArea,
};
use crate::forms::{ContactSubmission, FormStatus, use_form_sink};

#[component]
pub fn Pioneer() -> impl IntoView {
    view! {
        <div id="pioneer" class="relative pt-[210px] pb-[156px]">
            <DotBackground dot_color="#2b2b2b" bg_color="#333" />
            <div class="safe-viewport flex flex-col gap-32 items-center justify-center">
                <header class="w-full flex flex-col items-end">
                    <h2 class="text-[3.5rem] font-black uppercase rounded-3xl px-16 py-4 bg-white inline-block">
                        "Pioneer"
                    </h2>
                    <p class="font-medium text-[2rem] text-white mt-10">"Work with us on cutting edge research"</p>
                </header>
                <main class="flex flex-row gap-10">
                    <ResearchBento />
                    <div class="max-w-xl relative max-h-full">
                        <h3 class="text-4xl text-white absolute left-4 -top-16">"Areas of interest"</h3>
                        <div class="bg-blackAlpha-500 rounded-5xl py-8 px-10 text-white">
                            <div class="flex flex-col justify-between">
                                <h4 class="text-2xl font-black">{AREA_OF_INTEREST}</h4>
                                <div class="flex flex-col gap-2.5 leading-normal text-base pt-8 pb-10">
                                    {AREA_OF_INTEREST_COPY
                                        .iter()
                                        .map(|para| view! { <p>{*para}</p> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                            <div class="border-t border-solid border-whiteAlpha-700 mt-4">
                                <h3 class="text-2xl font-bold leading-normal py-8">
                                    "We help you build your future." <br /> "Share your vision:"
                                </h3>
                                <ContactForm />
                            </div>
                        </div>
                    </div>
                </main>
            </div>
        </div>
    }
}

#[component]
fn ResearchBento() -> impl IntoView {
    let (before, after) = RESEARCH_AREAS.split_at(RESEARCH_JOIN_SLOT.min(RESEARCH_AREAS.len()));
    let cell = |area: &ResearchArea| {
        view! {
            <div class=format!("rounded-xl bg-blackAlpha-800 p-6 w-56 h-56 {}", area.class)>
                <h4>{area.title}</h4>
            </div>
        }
    };

    view! {
        <div class="research-bento grid grid-cols-6 grid-rows-8 gap-3 max-w-[44rem] text-white text-xl font-extrabold uppercase leading-normal">
            {before.iter().map(cell).collect::<Vec<_>>()}
            <a
                href="#"
                class="bento-join-research-community rounded-xl bg-secondary p-6 w-56 h-56 flex flex-col gap-3.5"
            >
                <span>"Join research community"</span>
                <div class="rounded-full w-28 h-28 bg-gray-200"></div>
            </a>
            {after.iter().map(cell).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let sink = use_form_sink();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = ContactSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let outcome = FormStatus::from_result(sink.submit_contact(&submission));
        if outcome == FormStatus::Sent {
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        }
        set_status.set(outcome);
    };

    view! {
        <form class="contact-form flex flex-col gap-2.5" on:submit=on_submit>
            <div class="flex flex-row gap-2.5">
                <input
                    name="name"
                    placeholder="Contact name"
                    class="py-2.5 px-5 bg-transparent rounded-lg border border-solid border-whiteAlpha-500 flex-1"
                    bind:value=name
                />
                <input
                    name="email"
                    placeholder="nick@domain.ltd"
                    class="py-2.5 px-5 bg-transparent rounded-lg border border-solid border-whiteAlpha-500 flex-1"
                    bind:value=email
                />
            </div>
            <div>
                <textarea
                    name="message"
                    class="py-2.5 px-5 bg-transparent rounded-lg border border-solid border-whiteAlpha-500 w-full"
                    rows="6"
                    bind:value=message
                ></textarea>
            </div>
            <div class="flex flex-row justify-between items-center">
                <p class=move || status.with(FormStatus::class) role="status">
                    {move || status.with(FormStatus::message)}
                </p>
                <button type="submit" class="btn text-black bg-primary">"Submit"</button>
            </div>
        </form>
    }
}
