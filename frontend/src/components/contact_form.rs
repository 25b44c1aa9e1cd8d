use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::components::notification::{Notify, ToastContext};
use crate::forms::{ContactField, ContactForm};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub show_company: bool,
}

/// Contact form used on the home page section and on the contact page.
#[function_component(ContactFormCard)]
pub fn contact_form_card(props: &ContactFormProps) -> Html {
    let form = use_state(ContactForm::default);
    let sending = use_state(|| false);
    let toasts = use_context::<ToastContext>();

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(ContactField::Message, input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let sending = sending.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Ok(message) => {
                    info!("Contact form submitted by {}", message.email);
                    form.set(next);
                    sending.set(true);
                    let sending = sending.clone();
                    let toasts = toasts.clone();
                    spawn_local(async move {
                        let result = api::send_contact(&message).await;
                        sending.set(false);
                        match (result, toasts) {
                            (Ok(()), Some(toasts)) => toasts.success(
                                "Message sent successfully!",
                                "We'll get back to you within 24 hours.",
                            ),
                            (Err(e), Some(toasts)) => {
                                error!("Contact form delivery failed: {}", e);
                                toasts.error(
                                    "Failed to send message",
                                    "Please try again or email us directly.",
                                );
                            }
                            (Err(e), None) => error!("Contact form delivery failed: {}", e),
                            (Ok(()), None) => {}
                        }
                    });
                }
                Err(err) => {
                    if let Some(toasts) = &toasts {
                        toasts.error(&err.to_string(), err.detail());
                    }
                }
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <div class="form-row">
                <label>
                    {"Full Name *"}
                    <input type="text" name="name" value={form.name.clone()} oninput={on_input(ContactField::Name)} />
                </label>
                <label>
                    {"Email *"}
                    <input type="email" name="email" value={form.email.clone()} oninput={on_input(ContactField::Email)} />
                </label>
            </div>
            <div class="form-row">
                <label>
                    {"Phone"}
                    <input type="tel" name="phone" value={form.phone.clone()} oninput={on_input(ContactField::Phone)} />
                </label>
                if props.show_company {
                    <label>
                        {"Company"}
                        <input type="text" name="company" value={form.company.clone()} oninput={on_input(ContactField::Company)} />
                    </label>
                }
            </div>
            <label>
                {"Subject"}
                <input type="text" name="subject" value={form.subject.clone()} oninput={on_input(ContactField::Subject)} />
            </label>
            <label>
                {"Message *"}
                <textarea name="message" rows="5" value={form.message.clone()} oninput={on_message}></textarea>
            </label>
            <button type="submit" class="btn-primary" disabled={*sending}>
                { if *sending { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}
