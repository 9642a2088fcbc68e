use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::forms::{FormSinkHandle, FormStatus, SubscriptionRequest, use_form_sink};

/// Field signals of the subscription form.
#[derive(Clone, Copy)]
struct SubscriptionFields {
    email: RwSignal<String>,
    consent: RwSignal<bool>,
}

impl SubscriptionFields {
    fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            consent: RwSignal::new(false),
        }
    }

    /// Send the current values; a sent form starts over empty.
    fn submit(self, sink: &FormSinkHandle) -> FormStatus {
        let request = SubscriptionRequest {
            email: self.email.get_untracked(),
            consent: self.consent.get_untracked(),
        };
        let outcome = FormStatus::from_result(sink.submit_subscription(&request));
        if outcome == FormStatus::Sent {
            self.email.set(String::new());
            self.consent.set(false);
        }
        outcome
    }
}

/// Newsletter opt-in. Submissions go to the [`FormSink`](crate::forms::FormSink) in context.
#[component]
pub fn Subscription() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let sink = use_form_sink();
    let fields = SubscriptionFields::new();
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_status.set(fields.submit(&sink));
    };
    let SubscriptionFields { email, consent } = fields;

    let consent_label = format!(
        "Yes, I agree to receive email communications from {}",
        config.site.brand
    );
    let legend = format!(
        "Get the latest {} Content Straight To Your Inbox.",
        config.site.brand
    );

    view! {
        <section id="subscription" class="section-subscription">
            <form class="safe-viewport text-white py-16" on:submit=on_submit>
                <legend class="mb-16 uppercase text-4xl font-black max-w-3xl">{legend}</legend>
                <div class="max-w-3xl flex flex-row gap-6">
                    <input
                        name="email"
                        placeholder="Email address"
                        class="flex-1 rounded border border-solid border-whiteAlpha-500 bg-transparent py-2.5 px-5"
                        bind:value=email
                    />
                    <button type="submit" class="btn btn-lg bg-primary text-black uppercase">
                        "Subscribe Now"
                    </button>
                </div>
                <div class="mt-6">
                    <label>
                        <input class="mr-3" type="checkbox" name="consent" bind:checked=consent />
                        {consent_label}
                    </label>
                </div>
                <p class=move || status.with(FormStatus::class) role="status">
                    {move || status.with(FormStatus::message)}
                </p>
            </form>
        </section>
    }
}
