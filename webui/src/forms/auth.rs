use admissions_webapi_client::{LoginRequest, LoginResponse, RegisterRequest};
use log::error;
use web_sys::{HtmlDialogElement, MouseEvent, SubmitEvent};
use yew::{html, Callback, Html, NodeRef, UseStateHandle};

use super::{send, submit, use_form_context, FormKind, SubmitButton};
use crate::downloads::LoginPrompt;
use crate::notifications::Notify;
use crate::session::{LocalStorage, TokenStore};
use crate::utils;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Signup,
}

/// Shared access to the login/signup dialog.
#[derive(Clone, PartialEq)]
pub struct AuthModalHandle {
    dialog: NodeRef,
    view: UseStateHandle<AuthView>,
}

impl AuthModalHandle {
    pub fn new(dialog: NodeRef, view: UseStateHandle<AuthView>) -> Self {
        Self { dialog, view }
    }

    pub fn view(&self) -> AuthView {
        *self.view
    }

    pub fn show_login(&self) {
        self.view.set(AuthView::Login);
    }

    pub fn show_signup(&self) {
        self.view.set(AuthView::Signup);
    }

    pub fn open(&self) {
        let Some(dialog) = self.dialog.cast::<HtmlDialogElement>() else {
            error!("Login dialog is not mounted");
            return;
        };
        if !dialog.open() {
            if let Err(e) = dialog.show_modal() {
                error!("Could not open login dialog: {:?}", e);
            }
        }
    }

    pub fn close(&self) {
        if let Some(dialog) = self.dialog.cast::<HtmlDialogElement>() {
            dialog.close();
        }
    }
}

impl LoginPrompt for AuthModalHandle {
    fn open_login(&self) {
        self.show_login();
        self.open();
    }
}

/// Keeps the token of an accepted login, then closes the dialog.
///
/// A login whose token cannot be kept counts as failed and leaves the dialog
/// open. Returns whether the visitor is now logged in.
pub fn complete_login(
    reply: &LoginResponse,
    tokens: &impl TokenStore,
    notify: &impl Notify,
    close: impl FnOnce(),
) -> bool {
    if let Err(e) = tokens.store_token(&reply.token) {
        error!("Could not store session token: {}", e);
        notify.error(FormKind::Login.failure_message());
        return false;
    }

    notify.success(FormKind::Login.success_message(&reply.message));
    close();
    true
}

#[yew::function_component(AuthModal)]
pub fn auth_modal() -> Html {
    let auth = use_auth_modal();

    let onclick = Callback::from({
        let auth = auth.clone();
        move |event: MouseEvent| {
            if let Some(dialog) = auth.dialog.cast::<HtmlDialogElement>() {
                if utils::outside(&event, &dialog.get_bounding_client_rect()) {
                    dialog.close();
                }
            }
        }
    });

    html! {
        <dialog class="auth-modal" ref={auth.dialog.clone()} {onclick}>
            {
                match auth.view() {
                    AuthView::Login => html! { <LoginForm /> },
                    AuthView::Signup => html! { <SignupForm /> },
                }
            }
        </dialog>
    }
}

#[yew::hook]
fn use_auth_modal() -> AuthModalHandle {
    yew::use_context::<AuthModalHandle>().expect("auth modal to be provided")
}

#[yew::function_component(LoginForm)]
fn login_form() -> Html {
    let (api, notifier) = use_form_context();
    let auth = use_auth_modal();
    let busy = yew::use_state(|| false);
    let email = yew::use_node_ref();
    let password = yew::use_node_ref();

    let onsubmit = Callback::from({
        let auth = auth.clone();
        let busy = busy.clone();
        let email = email.clone();
        let password = password.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            let request = LoginRequest {
                email: utils::field_value(&email),
                password: utils::field_value(&password),
            };

            let api = api.clone();
            let notifier = notifier.clone();
            let auth = auth.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(reply) = send(FormKind::Login, &busy, &notifier, api.login(&request)).await {
                    complete_login(&reply, &LocalStorage, &notifier, || auth.close());
                }
            });
        }
    });

    let show_signup = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        auth.show_signup();
    });

    html! {
        <form id="loginForm" class="auth-form" {onsubmit}>
            <h2>{ "Login" }</h2>
            <input ref={email} id="loginEmail" type="email" placeholder="Email" required=true />
            <input ref={password} id="loginPassword" type="password" placeholder="Password" required=true />
            <SubmitButton kind={FormKind::Login} busy={*busy} />
            <p>
                { "Don't have an account? " }
                <a href="#signup" onclick={show_signup}>{ "Sign up" }</a>
            </p>
        </form>
    }
}

#[yew::function_component(SignupForm)]
fn signup_form() -> Html {
    let (api, notifier) = use_form_context();
    let auth = use_auth_modal();
    let busy = yew::use_state(|| false);
    let name = yew::use_node_ref();
    let email = yew::use_node_ref();
    let password = yew::use_node_ref();

    let onsubmit = Callback::from({
        let auth = auth.clone();
        let busy = busy.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            let request = RegisterRequest {
                name: utils::field_value(&name),
                email: utils::field_value(&email),
                password: utils::field_value(&password),
            };

            let api = api.clone();
            let notifier = notifier.clone();
            let auth = auth.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if submit(FormKind::Signup, &busy, &notifier, api.register(&request))
                    .await
                    .is_some()
                {
                    auth.show_login();
                }
            });
        }
    });

    let show_login = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        auth.show_login();
    });

    html! {
        <form id="signupForm" class="auth-form" {onsubmit}>
            <h2>{ "Sign Up" }</h2>
            <input ref={name} id="signupName" type="text" placeholder="Full name" required=true />
            <input ref={email} id="signupEmail" type="email" placeholder="Email" required=true />
            <input ref={password} id="signupPassword" type="password" placeholder="Password" required=true />
            <SubmitButton kind={FormKind::Signup} busy={*busy} />
            <p>
                { "Already have an account? " }
                <a href="#login" onclick={show_login}>{ "Login" }</a>
            </p>
        </form>
    }
}
