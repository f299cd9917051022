use dioxus::prelude::*;

use content::{PersonalInfo, Section};

#[component]
pub fn AboutSection() -> Element {
    let personal = use_context::<PersonalInfo>();

    rsx! {
        section { id: Section::About.anchor(), class: "section",
            div { class: "container",
                div { class: "section-header",
                    span { class: "eyebrow", "About" }
                    h2 { class: "section-title", "A little about me" }
                    div { class: "section-rule" }
                }

                div { class: "about-grid",
                    div {
                        p { class: "about-bio", "{personal.bio}" }

                        if !personal.experience.is_empty() {
                            div { class: "about-block",
                                h3 { "Experience" }
                                for job in personal.experience.iter() {
                                    div { key: "{job.title}-{job.company}", class: "about-entry",
                                        p { class: "heading", "{job.title}" }
                                        p { class: "meta", "{job.company} · {job.period}" }
                                        p { "{job.description}" }
                                    }
                                }
                            }
                        }

                        if !personal.education.is_empty() {
                            div { class: "about-block",
                                h3 { "Education" }
                                for school in personal.education.iter() {
                                    div { key: "{school.degree}", class: "about-entry",
                                        p { class: "heading", "{school.degree}" }
                                        p { class: "meta", "{school.institution} · {school.year}" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        if !personal.technologies.is_empty() {
                            div { class: "about-block",
                                h3 { "Technologies" }
                                for group in personal.technologies.iter() {
                                    div { key: "{group.category}", class: "tech-group",
                                        h4 { "{group.category}" }
                                        div { class: "tag-list",
                                            for item in group.items.iter() {
                                                span { key: "{item}", class: "tag", "{item}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if !personal.awards.is_empty() {
                            div { class: "about-block",
                                h3 { "Awards" }
                                for award in personal.awards.iter() {
                                    p { key: "{award}", class: "about-entry", "{award}" }
                                }
                            }
                        }

                        if !personal.interests.is_empty() {
                            div { class: "about-block",
                                h3 { "Interests" }
                                div { class: "tag-list",
                                    for interest in personal.interests.iter() {
                                        span { key: "{interest}", class: "tag", "{interest}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
