use log::error;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    AddEventListenerOptions, DomRect, HtmlDialogElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, MouseEvent,
};
use yew::NodeRef;

/// Value of the input, select or textarea behind `node`.
pub fn field_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|e| e.value())
        .or_else(|| node.cast::<HtmlSelectElement>().map(|e| e.value()))
        .or_else(|| node.cast::<HtmlTextAreaElement>().map(|e| e.value()))
        .unwrap_or_default()
}

pub fn reset_form(form: &NodeRef) {
    match form.cast::<HtmlFormElement>() {
        Some(form) => form.reset(),
        None => error!("Could not access form to reset it"),
    }
}

/// Whether a click on a modal dialog landed on its backdrop.
pub fn outside(click: &MouseEvent, rect: &DomRect) -> bool {
    ((click.x() as f64) < rect.x()
        || (click.x() as f64) > rect.x() + rect.width()
        || (click.y() as f64) < rect.y()
        || (click.y() as f64) > rect.y() + rect.height())
        && click
            .target()
            .and_then(|t| t.dyn_into::<HtmlDialogElement>().ok())
            .is_some()
}

/// Listener on the window, removed again when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn register(
        event: &'static str,
        passive: bool,
        handler: impl FnMut() + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        match window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self { event, callback }),
            Err(e) => {
                error!("Could not listen to window {} events: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                error!("Could not stop listening to window {} events: {:?}", self.event, e);
            }
        }
    }
}
