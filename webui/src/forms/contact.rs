use admissions_webapi_client::ContactRequest;
use web_sys::SubmitEvent;
use yew::{html, Callback, Html};

use super::{submit, use_form_context, FormKind, SubmitButton};
use crate::utils;

#[yew::function_component(ContactForm)]
pub fn contact_form() -> Html {
    let (api, notifier) = use_form_context();
    let busy = yew::use_state(|| false);
    let form = yew::use_node_ref();
    let name = yew::use_node_ref();
    let email = yew::use_node_ref();
    let message = yew::use_node_ref();

    let onsubmit = Callback::from({
        let busy = busy.clone();
        let form = form.clone();
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            let request = ContactRequest {
                name: utils::field_value(&name),
                email: utils::field_value(&email),
                message: utils::field_value(&message),
            };

            let api = api.clone();
            let notifier = notifier.clone();
            let busy = busy.clone();
            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if submit(FormKind::Contact, &busy, &notifier, api.submit_contact(&request))
                    .await
                    .is_some()
                {
                    utils::reset_form(&form);
                }
            });
        }
    });

    html! {
        <form id="contactForm" class="inquiry-form" ref={form} {onsubmit}>
            <input ref={name} type="text" placeholder="Your name" required=true />
            <input ref={email} type="email" placeholder="Your email" required=true />
            <textarea ref={message} rows="5" placeholder="How can we help?" required=true></textarea>
            <SubmitButton kind={FormKind::Contact} busy={*busy} />
        </form>
    }
}
