//! Contact form panel

use std::sync::Arc;

use leptos::prelude::*;
use storefront::{config::StorefrontConfig, contact::ContactForm};

use crate::browser;

/// Contact form; every field is required.
#[component]
pub fn ContactPanel(
    /// Provides the confirmation page shown after submission.
    config: Arc<StorefrontConfig>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let submit = move |_: leptos::ev::MouseEvent| {
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };

        match form.submit(&config) {
            Ok(destination) => browser::navigate(destination),
            Err(error) => browser::alert(&error.to_string()),
        }
    };

    view! {
        <section class="rounded-lg border border-slate-200 bg-white p-4 shadow-sm">
            <h2 class="mb-4 text-lg font-semibold">"Contact Us"</h2>
            <div class="flex flex-col gap-3">
                <input
                    id="contactName"
                    type="text"
                    placeholder="Your name"
                    class="rounded-md border border-slate-300 px-3 py-2"
                    prop:value=move || name.get()
                    on:input=move |event| name.set(event_target_value(&event))
                />
                <input
                    id="contactEmail"
                    type="email"
                    placeholder="Your email"
                    class="rounded-md border border-slate-300 px-3 py-2"
                    prop:value=move || email.get()
                    on:input=move |event| email.set(event_target_value(&event))
                />
                <textarea
                    id="contactMessage"
                    rows="4"
                    placeholder="Your message"
                    class="rounded-md border border-slate-300 px-3 py-2"
                    prop:value=move || message.get()
                    on:input=move |event| message.set(event_target_value(&event))
                ></textarea>
                <button
                    type="button"
                    class="rounded-md bg-slate-900 px-3 py-2 font-medium text-white hover:bg-slate-700"
                    on:click=submit
                >
                    "Send Message"
                </button>
            </div>
        </section>
    }
}
