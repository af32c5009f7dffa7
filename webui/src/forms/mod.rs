mod admission;
mod auth;
mod contact;

use std::future::Future;

use admissions_webapi_client::{AdmissionsApiClient, GatewayError, LoginResponse, MessageResponse};
use log::error;
use yew::{html, Html, Properties, UseStateHandle};

use crate::notifications::{Notifier, Notify};

pub use admission::AdmissionForm;
pub use auth::{AuthModal, AuthModalHandle, AuthView};
pub use contact::ContactForm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
    Admission,
    Contact,
}

impl FormKind {
    pub fn idle_label(self) -> &'static str {
        match self {
            FormKind::Login => "Login",
            FormKind::Signup => "Sign Up",
            FormKind::Admission => "Submit Inquiry",
            FormKind::Contact => "Send Message",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            FormKind::Login => "Logging in...",
            FormKind::Signup => "Signing up...",
            FormKind::Admission => "Submitting...",
            FormKind::Contact => "Sending...",
        }
    }

    /// Shown when the request never produced a server verdict.
    pub fn failure_message(self) -> &'static str {
        match self {
            FormKind::Login => "Error logging in. Please try again.",
            FormKind::Signup => "Error signing up. Please try again.",
            FormKind::Admission | FormKind::Contact => "Error submitting inquiry. Please try again.",
        }
    }

    pub fn success_message(self, server_message: &str) -> String {
        match self {
            FormKind::Login => "Login successful!".to_owned(),
            FormKind::Signup => "Signup successful! Please login.".to_owned(),
            FormKind::Admission | FormKind::Contact => server_message.to_owned(),
        }
    }
}

/// The button that triggered a submission.
pub trait SubmitControl {
    fn set_busy(&self, busy: bool);
}

impl SubmitControl for UseStateHandle<bool> {
    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

pub trait ServerReply {
    fn message(&self) -> &str;
}

impl ServerReply for LoginResponse {
    fn message(&self) -> &str {
        &self.message
    }
}

impl ServerReply for MessageResponse {
    fn message(&self) -> &str {
        &self.message
    }
}

/// Runs one submission attempt of a `kind` form and announces its success.
///
/// The control is busy while the request is in flight and released whatever
/// the outcome. Returns the reply only when the server accepted the request;
/// every failure has been reported by then.
pub async fn submit<T, Fut>(
    kind: FormKind,
    control: &impl SubmitControl,
    notify: &impl Notify,
    request: Fut,
) -> Option<T>
where
    T: ServerReply,
    Fut: Future<Output = Result<T, GatewayError>>,
{
    let reply = send(kind, control, notify, request).await?;
    notify.success(kind.success_message(reply.message()));
    Some(reply)
}

/// Like [`submit`], but leaves the success announcement to the caller.
pub async fn send<T, Fut>(
    kind: FormKind,
    control: &impl SubmitControl,
    notify: &impl Notify,
    request: Fut,
) -> Option<T>
where
    Fut: Future<Output = Result<T, GatewayError>>,
{
    control.set_busy(true);
    let outcome = request.await;
    control.set_busy(false);

    match outcome {
        Ok(reply) => Some(reply),
        Err(GatewayError::ApiError { reason }) => {
            notify.error(reason);
            None
        }
        Err(e) => {
            error!("{:?} form submission failed: {}", kind, e);
            notify.error(kind.failure_message());
            None
        }
    }
}

#[yew::hook]
fn use_form_context() -> (AdmissionsApiClient, Notifier) {
    let api = yew::use_context::<AdmissionsApiClient>().expect("API client to be provided");
    let notifier = yew::use_context::<Notifier>().expect("notifier to be provided");
    (api, notifier)
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub kind: FormKind,
    pub busy: bool,
}

#[yew::function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    let label = if props.busy {
        props.kind.busy_label()
    } else {
        props.kind.idle_label()
    };

    html! {
        <button type="submit" class="btn btn-primary" disabled={props.busy}>{ label }</button>
    }
}
