use dioxus::prelude::*;

use crate::web::dom::PageTheme;

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<PageTheme>>();
    let dark = theme.read().theme().is_dark();

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                theme.write().toggle();
            },
            if dark {
                "☀"
            } else {
                "☾"
            }
        }
    }
}
