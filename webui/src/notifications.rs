use std::{rc::Rc, time::Duration};

use timing::{BrowserTimer, Timer};
use yew::{classes, html, Callback, Html, Properties, Reducible, UseReducerDispatcher};

pub const FADE_OUT: Duration = Duration::from_millis(500);

const AREA_STYLE: &str = "position: fixed; top: 20px; right: 20px; z-index: 9999; \
    display: flex; flex-direction: column; gap: 10px; max-width: 300px;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// How long a toast stays fully visible before it starts fading.
    pub fn lifetime(self) -> Duration {
        match self {
            NotificationKind::Success => Duration::from_millis(3000),
            NotificationKind::Error => Duration::from_millis(4000),
        }
    }

    fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle me-2",
            NotificationKind::Error => "fas fa-exclamation-triangle me-2",
        }
    }

    fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "linear-gradient(135deg, #28a745, #20c997)",
            NotificationKind::Error => "linear-gradient(135deg, #dc3545, #fd7e14)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: usize,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    next_id: usize,
    pub visible: Vec<Notification>,
}

pub enum NotificationAction {
    Push {
        kind: NotificationKind,
        message: String,
    },
    Dismiss(usize),
}

impl Reducible for Notifications {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Push { kind, message } => {
                next.visible.push(Notification {
                    id: next.next_id,
                    kind,
                    message,
                });
                next.next_id += 1;
            }
            NotificationAction::Dismiss(id) => next.visible.retain(|n| n.id != id),
        }
        Rc::new(next)
    }
}

pub trait Notify {
    fn notify(&self, kind: NotificationKind, message: String);

    fn success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message.into());
    }

    fn error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message.into());
    }
}

#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<Notifications>,
}

impl Notifier {
    pub fn new(dispatcher: UseReducerDispatcher<Notifications>) -> Self {
        Self { dispatcher }
    }
}

impl Notify for Notifier {
    fn notify(&self, kind: NotificationKind, message: String) {
        self.dispatcher
            .dispatch(NotificationAction::Push { kind, message });
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notification: Notification,
    on_expire: Callback<usize>,
}

#[yew::function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let fading = yew::use_state(|| false);
    let id = props.notification.id;
    let kind = props.notification.kind;

    {
        let fading = fading.clone();
        let on_expire = props.on_expire.clone();
        yew::use_effect_with(id, move |_| {
            BrowserTimer
                .schedule(kind.lifetime(), Box::new(move || fading.set(true)))
                .forget();
            BrowserTimer
                .schedule(
                    kind.lifetime() + FADE_OUT,
                    Box::new(move || on_expire.emit(id)),
                )
                .forget();
        });
    }

    let animation = if *fading {
        "fadeOut 0.5s ease-out"
    } else {
        "slideInRight 0.5s ease-out"
    };
    let style = format!(
        "background: {}; color: white; padding: 15px 20px; border-radius: 12px; \
         font-weight: 600; animation: {};",
        kind.background(),
        animation
    );

    html! {
        <div class={classes!("notification", kind.class())} {style} role="status">
            <i class={kind.icon()}></i>
            { props.notification.message.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationAreaProps {
    pub notifications: Vec<Notification>,
    pub on_expire: Callback<usize>,
}

#[yew::function_component(NotificationArea)]
pub fn notification_area(props: &NotificationAreaProps) -> Html {
    html! {
        <div class="notification-area" style={AREA_STYLE}>
            {
                for props.notifications.iter().map(|notification| html! {
                    <Toast
                        key={notification.id.to_string()}
                        notification={notification.clone()}
                        on_expire={props.on_expire.clone()} />
                })
            }
        </div>
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier(pub std::cell::RefCell<Vec<(NotificationKind, String)>>);

#[cfg(test)]
impl Notify for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: String) {
        self.0.borrow_mut().push((kind, message));
    }
}
