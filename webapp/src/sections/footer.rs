use chrono::{Datelike, Local};
use dioxus::prelude::*;

use content::{PersonalInfo, Section};

#[component]
pub fn Footer() -> Element {
    let personal = use_context::<PersonalInfo>();
    let year = Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div {
                    p { class: "name", "{personal.full_name}" }
                    p { "{personal.title}" }
                }
                nav { class: "nav-links",
                    for section in Section::ALL {
                        a { key: "{section.anchor()}", class: "nav-link", href: section.href(), "{section.label()}" }
                    }
                }
                p { "© {year} {personal.full_name}. All rights reserved." }
            }
        }
    }
}
