use dioxus::prelude::*;

use content::{PersonalInfo, Section};

const HEADLINE_SKILLS: usize = 5;

#[component]
pub fn HeroSection() -> Element {
    let personal = use_context::<PersonalInfo>();

    rsx! {
        section { id: Section::Hero.anchor(), class: "hero",
            div { class: "container",
                div { class: "hero-content",
                    span { class: "eyebrow", "{personal.title}" }
                    h1 { class: "hero-title", "Hi, I'm {personal.full_name}" }
                    p { class: "hero-subtitle", "{personal.bio}" }

                    div { class: "hero-actions",
                        a {
                            class: "btn btn-primary btn-lg",
                            href: Section::Projects.href(),
                            "View My Work"
                        }
                        a {
                            class: "btn btn-outline btn-lg",
                            href: Section::Contact.href(),
                            "Get In Touch"
                        }
                        if let Some(resume) = personal.resume_link.as_ref() {
                            a {
                                class: "btn btn-outline btn-lg",
                                href: "{resume}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Resume"
                            }
                        }
                    }

                    div { class: "hero-skills",
                        for skill in personal.headline_skills(HEADLINE_SKILLS).iter() {
                            span { key: "{skill}", "{skill}" }
                        }
                    }

                    p { class: "hero-location", "Based in {personal.location}" }
                }
            }
        }
    }
}
