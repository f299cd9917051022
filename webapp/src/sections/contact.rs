use dioxus::prelude::*;

use content::{PersonalInfo, Section, personal::display_url};

#[component]
pub fn ContactSection() -> Element {
    let personal = use_context::<PersonalInfo>();

    rsx! {
        section { id: Section::Contact.anchor(), class: "section",
            div { class: "container",
                div { class: "section-header",
                    span { class: "eyebrow", "Contact" }
                    h2 { class: "section-title", "Let's work together" }
                    div { class: "section-rule" }
                    p { class: "section-lead",
                        "Have a project in mind or just want to say hello? My inbox is always open."
                    }
                }

                div { class: "contact-grid",
                    div {
                        div { class: "contact-item",
                            h4 { "Email" }
                            a { href: "mailto:{personal.email}", "{personal.email}" }
                        }
                        if let Some(phone) = personal.phone.as_ref() {
                            div { class: "contact-item",
                                h4 { "Phone" }
                                a { href: "tel:{phone}", "{phone}" }
                            }
                        }
                        div { class: "contact-item",
                            h4 { "Location" }
                            p { "{personal.location}" }
                        }
                    }

                    div {
                        div { class: "contact-item",
                            h4 { "Elsewhere" }
                            div { class: "social-links",
                                for (label, url) in personal.socials.links() {
                                    a {
                                        key: "{label}",
                                        href: "{url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        title: "{display_url(url)}",
                                        "{label}"
                                    }
                                }
                            }
                        }
                        a {
                            class: "btn btn-primary btn-lg",
                            href: "mailto:{personal.email}",
                            "Say Hello"
                        }
                    }
                }
            }
        }
    }
}
