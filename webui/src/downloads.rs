use log::{error, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, MouseEvent};
use yew::{html, AttrValue, Callback, Children, Html, Properties};

use crate::forms::AuthModalHandle;
use crate::notifications::{Notifier, Notify};
use crate::session::{LocalStorage, TokenStore};

pub const LOGIN_PROMPT: &str = "Please login to download files. 🤖";

pub trait LoginPrompt {
    fn open_login(&self);
}

pub trait Downloader {
    fn download(&self, href: &str, file_name: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub file_name: String,
}

impl DownloadLink {
    fn target(&self) -> Option<&str> {
        let href = self.href.trim();
        (!href.is_empty() && href != "#").then_some(href)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    LoginRequired,
    Started,
    NoTarget,
}

/// Starts the download behind `link` for logged-in visitors, otherwise asks
/// them to log in.
pub fn request_download(
    link: &DownloadLink,
    tokens: &impl TokenStore,
    notify: &impl Notify,
    login: &impl LoginPrompt,
    downloader: &impl Downloader,
) -> DownloadOutcome {
    let logged_in = tokens.has_token().unwrap_or_else(|e| {
        warn!("Could not read session token: {}", e);
        false
    });

    if !logged_in {
        notify.success(LOGIN_PROMPT);
        login.open_login();
        return DownloadOutcome::LoginRequired;
    }

    match link.target() {
        Some(href) => {
            downloader.download(href, &link.file_name);
            DownloadOutcome::Started
        }
        None => DownloadOutcome::NoTarget,
    }
}

/// Downloads by clicking a temporary anchor element.
pub struct AnchorDownloader;

impl AnchorDownloader {
    fn click_temporary_anchor(href: &str, file_name: &str) -> Result<(), JsValue> {
        let body = gloo_utils::body();
        let anchor = gloo_utils::document()
            .create_element("a")?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(JsValue::from)?;
        anchor.set_href(href);
        anchor.set_download(file_name);

        body.append_child(&anchor)?;
        anchor.click();
        body.remove_child(&anchor)?;
        Ok(())
    }
}

impl Downloader for AnchorDownloader {
    fn download(&self, href: &str, file_name: &str) {
        if let Err(e) = Self::click_temporary_anchor(href, file_name) {
            error!("Failed to start download of {}: {:?}", href, e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedDownloadProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub file_name: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[yew::function_component(ProtectedDownload)]
pub fn protected_download(props: &ProtectedDownloadProps) -> Html {
    let notifier = yew::use_context::<Notifier>().expect("notifier to be provided");
    let auth = yew::use_context::<AuthModalHandle>().expect("auth modal to be provided");

    let onclick = Callback::from({
        let link = DownloadLink {
            href: props.href.to_string(),
            file_name: props.file_name.to_string(),
        };
        move |event: MouseEvent| {
            event.prevent_default();
            request_download(&link, &LocalStorage, &notifier, &auth, &AnchorDownloader);
        }
    });

    html! {
        <a class="protected-download" href={props.href.clone()} download={props.file_name.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}
