mod config;
mod courses;
mod downloads;
mod forms;
mod layout;
mod notifications;
mod sections;
mod session;
mod utils;

use std::error::Error;

use admissions_webapi_client::AdmissionsApiClient;
use timing::BrowserTimer;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::courses::CourseList;
use crate::downloads::ProtectedDownload;
use crate::forms::{AdmissionForm, AuthModal, AuthModalHandle, AuthView, ContactForm};
use crate::layout::Layout;
use crate::notifications::{NotificationAction, NotificationArea, Notifications, Notifier};
use crate::sections::{active_class, show_section, FloatingCtas, MobileNav, Navbar, Section};
use crate::utils::WindowListener;

const DOWNLOADS: &[(&str, &str, &str)] = &[
    ("Prospectus 2025", "/downloads/prospectus.pdf", "prospectus.pdf"),
    ("Fee Structure", "/downloads/fee-structure.pdf", "fee-structure.pdf"),
    ("Course Syllabus", "/downloads/syllabus.pdf", "syllabus.pdf"),
];

fn section_content(section: Section, on_navigate: &Callback<Section>) -> Html {
    match section {
        Section::Home => html! {
            <div class="hero">
                <h1>{ "Shape your future in technology" }</h1>
                <p>{ "Industry-led programs with hands-on projects and placement support." }</p>
                <button class="btn btn-primary" onclick={on_navigate.reform(|_| Section::Courses)}>
                    { "Explore Courses" }
                </button>
            </div>
        },
        Section::About => html! {
            <div class="about">
                <h2>{ "About Us" }</h2>
                <p>{ "We train engineers through small cohorts, mentors from industry and real projects." }</p>
            </div>
        },
        Section::Courses => html! {
            <>
                <h2>{ "Our Courses" }</h2>
                <CourseList />
            </>
        },
        Section::Admission => html! {
            <>
                <h2>{ "Admission Inquiry" }</h2>
                <AdmissionForm />
            </>
        },
        Section::Downloads => html! {
            <>
                <h2>{ "Downloads" }</h2>
                <ul class="download-list">
                    {
                        for DOWNLOADS.iter().map(|&(title, href, file_name)| html! {
                            <li>
                                <ProtectedDownload {href} {file_name}>
                                    <i class="fas fa-download me-2"></i>{ title }
                                </ProtectedDownload>
                            </li>
                        })
                    }
                </ul>
            </>
        },
        Section::Contact => html! {
            <>
                <h2>{ "Contact Us" }</h2>
                <ContactForm />
            </>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::from_environment());
    let api = use_memo(config.api_url.clone(), |url| AdmissionsApiClient::new(url.clone()));
    let notifications = use_reducer(Notifications::default);
    let notifier = Notifier::new(notifications.dispatcher());
    let auth = AuthModalHandle::new(use_node_ref(), use_state(|| AuthView::Login));
    let active_section = use_state(|| Section::Home);
    let page_layout = use_state(|| Layout::for_width(layout::window_width()));
    let navbar_shadow = use_state(|| None);

    {
        let config = config.clone();
        let page_layout = page_layout.clone();
        let navbar_shadow = navbar_shadow.clone();
        use_effect_with((), move |_| {
            let on_resize = timing::debounce(BrowserTimer, config.resize_debounce, move |()| {
                page_layout.set(Layout::for_width(layout::window_width()));
            });
            let on_scroll = timing::throttle(BrowserTimer, config.scroll_throttle, move |()| {
                navbar_shadow.set(layout::navbar_shadow(layout::scroll_offset()));
            });

            on_resize.call(());
            let listeners = [
                WindowListener::register("resize", false, move || on_resize.call(())),
                WindowListener::register("scroll", true, move || {
                    on_scroll.call(());
                }),
            ];

            move || drop(listeners)
        });
    }

    let on_navigate = Callback::from({
        let active_section = active_section.clone();
        move |section| show_section(&active_section, section)
    });

    let on_expire = Callback::from({
        let dispatcher = notifications.dispatcher();
        move |id| dispatcher.dispatch(NotificationAction::Dismiss(id))
    });

    html! {
        <ContextProvider<AdmissionsApiClient> context={(*api).clone()}>
        <ContextProvider<Notifier> context={notifier}>
        <ContextProvider<AuthModalHandle> context={auth}>
            <Navbar
                active={*active_section}
                layout={*page_layout}
                on_navigate={on_navigate.clone()}
                shadow={*navbar_shadow} />
            <main>
                {
                    for Section::ALL.iter().map(|&section| html! {
                        <section
                            id={section.id()}
                            class={classes!("section", active_class(section, *active_section))}>
                            { section_content(section, &on_navigate) }
                        </section>
                    })
                }
            </main>
            <MobileNav active={*active_section} layout={*page_layout} on_navigate={on_navigate.clone()} />
            <FloatingCtas layout={*page_layout} on_navigate={on_navigate.clone()} />
            <AuthModal />
            <NotificationArea notifications={notifications.visible.clone()} {on_expire} />
        </ContextProvider<AuthModalHandle>>
        </ContextProvider<Notifier>>
        </ContextProvider<AdmissionsApiClient>>
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let level = if cfg!(debug_assertions) {
        log::Level::Info
    } else {
        log::Level::Error
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    yew::Renderer::<App>::new().render();

    Ok(())
}
