use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::{classes, html, Callback, Html, Properties};

use crate::downloads::LoginPrompt;
use crate::forms::AuthModalHandle;
use crate::layout::Layout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Courses,
    Admission,
    Downloads,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Courses,
        Section::Admission,
        Section::Downloads,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Courses => "courses",
            Section::Admission => "admission",
            Section::Downloads => "downloads",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Courses => "Courses",
            Section::Admission => "Admission",
            Section::Downloads => "Downloads",
            Section::Contact => "Contact",
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Marker class of the visible section and of its nav links.
pub fn active_class(section: Section, active: Section) -> Option<&'static str> {
    (section == active).then_some("active")
}

/// Holder of the currently visible section.
pub trait SectionSwitch {
    fn activate(&self, section: Section);

    fn scroll_to_top(&self) {
        scroll_to_top();
    }
}

impl SectionSwitch for yew::UseStateHandle<Section> {
    fn activate(&self, section: Section) {
        self.set(section);
    }
}

/// Makes `section` the only visible one and scrolls back to the top.
pub fn show_section(active: &impl SectionSwitch, section: Section) {
    active.activate(section);
    active.scroll_to_top();
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub layout: Layout,
    pub on_navigate: Callback<Section>,
    #[prop_or_default]
    pub shadow: Option<&'static str>,
}

fn nav_links(props: &NavProps) -> Html {
    Section::ALL
        .iter()
        .map(|&section| {
            let onclick = props.on_navigate.reform(move |_| section);
            html! {
                <a
                    class={classes!("nav-link", active_class(section, props.active))}
                    data-section={section.id()}
                    {onclick}>
                    { section.title() }
                </a>
            }
        })
        .collect::<Html>()
}

#[yew::function_component(Navbar)]
pub fn navbar(props: &NavProps) -> Html {
    let auth = yew::use_context::<AuthModalHandle>().expect("auth modal to be provided");
    let open_login = Callback::from(move |_| auth.open_login());
    let style = format!(
        "{}{}",
        props.layout.navbar_style(),
        props.shadow.unwrap_or_default()
    );

    html! {
        <nav class="navbar" {style}>
            <span class="navbar-brand">{ "Admissions" }</span>
            { nav_links(props) }
            <button class="btn btn-login" onclick={open_login}>{ "Login" }</button>
        </nav>
    }
}

#[yew::function_component(MobileNav)]
pub fn mobile_nav(props: &NavProps) -> Html {
    html! {
        <nav class="mobile-nav" style={props.layout.mobile_nav_style()}>
            { nav_links(props) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingCtasProps {
    pub layout: Layout,
    pub on_navigate: Callback<Section>,
}

#[yew::function_component(FloatingCtas)]
pub fn floating_ctas(props: &FloatingCtasProps) -> Html {
    html! {
        <div class="floating-ctas" style={props.layout.cta_style()}>
            <button class="btn btn-apply" onclick={props.on_navigate.reform(|_| Section::Admission)}>
                { "Apply Now" }
            </button>
            <button class="btn btn-contact" onclick={props.on_navigate.reform(|_| Section::Contact)}>
                { "Contact Us" }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashSet};

    use super::*;

    struct RecordingSwitch {
        active: Cell<Section>,
        scrolls: Cell<usize>,
    }

    impl SectionSwitch for RecordingSwitch {
        fn activate(&self, section: Section) {
            self.active.set(section);
        }

        fn scroll_to_top(&self) {
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    #[test]
    fn switching_leaves_exactly_one_section_active() {
        let switch = RecordingSwitch {
            active: Cell::new(Section::Home),
            scrolls: Cell::new(0),
        };

        for target in [Section::Courses, Section::Contact, Section::Contact] {
            show_section(&switch, target);

            let active = Section::ALL
                .iter()
                .filter(|&&s| active_class(s, switch.active.get()).is_some())
                .collect::<Vec<_>>();
            assert_eq!(active, vec![&target]);
        }
        assert_eq!(switch.scrolls.get(), 3);
    }

    #[test]
    fn only_the_matching_nav_link_is_marked() {
        let classes = Section::ALL
            .iter()
            .map(|&s| classes!("nav-link", active_class(s, Section::Admission)))
            .collect::<Vec<_>>();

        assert_eq!(classes.iter().filter(|c| c.contains("active")).count(), 1);
        assert!(classes[3].contains("active"));
    }

    #[test]
    fn section_ids_are_unique() {
        let ids = Section::ALL.iter().map(|s| s.id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
