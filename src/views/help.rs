// ============================================================================
// HELP - Preguntas frecuentes y formulario de contacto
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{bind, Accordion, TextAreaField, TextField};
use crate::data::help::faq_categories;
use crate::hooks::use_toast;
use crate::models::forms::ContactForm;
use crate::services::simulated_api;

#[function_component(HelpPage)]
pub fn help_page() -> Html {
    let categories = use_memo((), |_| faq_categories());

    html! {
        <div class="page help">
            <h1>{"Frequently Asked Questions"}</h1>
            <p class="muted">{"Find answers to common questions about DisasterHaven and how to use our platform."}</p>

            <div class="stack">
                { for categories.iter().map(|category| {
                    let items: Vec<_> = category
                        .questions
                        .iter()
                        .enumerate()
                        .map(|(index, faq)| (category.item_id(index), faq.clone()))
                        .collect();
                    html! {
                        <div key={category.key.clone()} class="card">
                            <h2>{ format!("{} {}", category.icon, category.title) }</h2>
                            <Accordion {items} />
                        </div>
                    }
                }) }
            </div>

            <ContactSection />
        </div>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let toast = use_toast();
    let form = use_state(ContactForm::default);
    let sending = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                toast.error("Error", &err);
                return;
            }
            sending.set(true);
            let form = form.clone();
            let sending = sending.clone();
            let toast = toast.clone();
            spawn_local(async move {
                simulated_api::submit_form("contacto").await;
                toast.notify(
                    "Message sent!",
                    "Our support team will respond within 24 hours.",
                );
                form.set(ContactForm::default());
                sending.set(false);
            });
        })
    };

    html! {
        <form class="card" onsubmit={on_submit}>
            <h2>{"✉️ Contact Us"}</h2>
            <p class="muted small">{"Can't find what you're looking for? Send us a message."}</p>
            <div class="grid grid-2">
                <TextField
                    id="contact-name"
                    label="Name"
                    value={form.name.clone()}
                    on_input={bind(&form, |f: &mut ContactForm, v| f.name = v)}
                />
                <TextField
                    id="contact-email"
                    label="Email"
                    input_type="email"
                    value={form.email.clone()}
                    on_input={bind(&form, |f: &mut ContactForm, v| f.email = v)}
                />
            </div>
            <TextAreaField
                id="contact-message"
                label="Message"
                value={form.message.clone()}
                placeholder="How can we help?"
                on_input={bind(&form, |f: &mut ContactForm, v| f.message = v)}
            />
            <button type="submit" class="btn btn-primary" disabled={*sending}>
                { if *sending { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}
