use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::error;
use web_time::Instant;

use common::{
    PortfolioConfig,
    listeners::Subscription,
    tracker::{SectionTracker, TrackerEvent},
};
use content::{PersonalInfo, Section};

use crate::{
    web::dom::{DomListener, DomViewport},
    components::theme_toggle::ThemeToggle,
};

// the tracker lives outside the signal graph so that scroll ticks which do not
// change anything never schedule a render.  the subscription copies the two
// values the navbar draws into signals
struct NavTracking {
    tracker: Rc<RefCell<SectionTracker>>,
    _subscription: Subscription<TrackerEvent>,
    _scroll: Option<DomListener>,
}

fn use_nav_tracking(active: Signal<Section>, scrolled: Signal<bool>) -> Rc<NavTracking> {
    let config = use_context::<PortfolioConfig>();

    use_hook(move || {
        let tracker = Rc::new(RefCell::new(SectionTracker::new(config.tracker)));

        let subscription = tracker.borrow().subscribe(move |event| match *event {
            TrackerEvent::SectionChanged(section) => {
                let mut active = active;
                active.set(section);
            }
            TrackerEvent::ScrolledChanged(value) => {
                let mut scrolled = scrolled;
                scrolled.set(value);
            }
        });

        let scroll = DomListener::on_window("scroll", {
            let tracker = Rc::clone(&tracker);
            move |_| match DomViewport::new() {
                Ok(viewport) => {
                    tracker.borrow_mut().on_scroll(&viewport, Instant::now());
                }
                Err(err) => error!("scroll tick without a viewport: {err}"),
            }
        })
        .map_err(|err| error!("failed to track scrolling: {err}"))
        .ok();

        Rc::new(NavTracking {
            tracker,
            _subscription: subscription,
            _scroll: scroll,
        })
    })
}

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    section: Section,
    active: Section,
    on_activate: EventHandler<Section>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let section = props.section;

    rsx! {
        a {
            class: if props.active == section { "nav-link active" } else { "nav-link" },
            href: section.href(),
            onclick: move |_| props.on_activate.call(section),
            "{section.label()}"
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let personal = use_context::<PersonalInfo>();

    let active = use_signal(Section::first);
    let scrolled = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    let tracking = use_nav_tracking(active, scrolled);

    // sections are in the document by the time effects run
    use_effect({
        let tracker = Rc::clone(&tracking.tracker);
        move || match DomViewport::new() {
            Ok(viewport) => {
                tracker.borrow_mut().refresh(&viewport, Instant::now());
            }
            Err(err) => error!("initial section refresh failed: {err}"),
        }
    });

    let on_activate = {
        let tracker = Rc::clone(&tracking.tracker);
        move |section: Section| {
            tracker.borrow_mut().on_link_activated(section, Instant::now());
            menu_open.set(false);
        }
    };

    let initial = personal.name.chars().next().unwrap_or('.');
    let rest: String = personal.name.chars().skip(1).collect();

    rsx! {
        header { class: if scrolled() { "app-header scrolled" } else { "app-header" },
            div { class: "container nav-container",
                a { class: "logo", href: Section::first().href(),
                    span { class: "initial", "{initial}" }
                    "{rest}"
                }

                nav { class: "nav-links",
                    for section in Section::ALL {
                        NavBarButton {
                            key: "{section.anchor()}",
                            section,
                            active: active(),
                            on_activate: on_activate.clone(),
                        }
                    }
                    ThemeToggle {}
                    button {
                        class: "menu-button",
                        aria_label: if menu_open() { "Close menu" } else { "Open menu" },
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            "×"
                        } else {
                            "☰"
                        }
                    }
                }
            }

            if menu_open() {
                nav { class: "mobile-nav",
                    for section in Section::ALL {
                        NavBarButton {
                            key: "{section.anchor()}",
                            section,
                            active: active(),
                            on_activate: on_activate.clone(),
                        }
                    }
                }
            }
        }
    }
}
