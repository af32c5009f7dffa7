use admissions_webapi_client::AdmissionInquiry;
use web_sys::SubmitEvent;
use yew::{html, Callback, Html};

use super::{submit, use_form_context, FormKind, SubmitButton};
use crate::courses::COURSES;
use crate::utils;

#[yew::function_component(AdmissionForm)]
pub fn admission_form() -> Html {
    let (api, notifier) = use_form_context();
    let busy = yew::use_state(|| false);
    let form = yew::use_node_ref();
    let name = yew::use_node_ref();
    let mobile = yew::use_node_ref();
    let course = yew::use_node_ref();

    let onsubmit = Callback::from({
        let busy = busy.clone();
        let form = form.clone();
        let name = name.clone();
        let mobile = mobile.clone();
        let course = course.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            let inquiry = AdmissionInquiry {
                name: utils::field_value(&name),
                mobile: utils::field_value(&mobile),
                course: utils::field_value(&course),
            };

            let api = api.clone();
            let notifier = notifier.clone();
            let busy = busy.clone();
            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if submit(FormKind::Admission, &busy, &notifier, api.submit_admission(&inquiry))
                    .await
                    .is_some()
                {
                    utils::reset_form(&form);
                }
            });
        }
    });

    html! {
        <form id="admissionForm" class="inquiry-form" ref={form} {onsubmit}>
            <input ref={name} type="text" placeholder="Full name" required=true />
            <input ref={mobile} type="tel" placeholder="Mobile number" required=true />
            <select ref={course} required=true>
                <option value="" selected=true disabled=true>{ "Select a course" }</option>
                { for COURSES.iter().map(|c| html! { <option value={c.title}>{ c.title }</option> }) }
            </select>
            <SubmitButton kind={FormKind::Admission} busy={*busy} />
        </form>
    }
}
