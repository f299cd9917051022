use dioxus::prelude::*;

use crate::web::dom::PageViewer;

// project detail modal
//
// renders nothing while the viewer is closed.  the backdrop, the close button and
// escape all end up in DetailViewer::close, which gives back the scroll lock
#[component]
pub fn ProjectModal(mut viewer: Signal<PageViewer>) -> Element {
    let state = viewer.read();

    let project = match state.selected_project() {
        Some(project) if state.is_open() => project.clone(),
        _ => return rsx! {},
    };
    let index = state.current_image_index();
    let count = state.image_count();
    let image = state.current_image().unwrap_or(&project.image).to_owned();
    drop(state);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                viewer.write().close();
            },
            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "btn-close",
                    aria_label: "Close project details",
                    onclick: move |_| {
                        viewer.write().close();
                    },
                    "×"
                }

                div { class: "modal-gallery",
                    img {
                        key: "{index}",
                        src: "{image}",
                        alt: "{project.title} ({index + 1} of {count})",
                    }

                    if count > 1 {
                        button {
                            class: "carousel-arrow prev",
                            aria_label: "Previous image",
                            onclick: move |_| {
                                viewer.write().previous_image();
                            },
                            "‹"
                        }
                        button {
                            class: "carousel-arrow next",
                            aria_label: "Next image",
                            onclick: move |_| {
                                viewer.write().next_image();
                            },
                            "›"
                        }
                        div { class: "carousel-dots",
                            for i in 0..count {
                                button {
                                    key: "{i}",
                                    class: if i == index { "carousel-dot active" } else { "carousel-dot" },
                                    aria_label: "Go to image {i + 1}",
                                    onclick: move |_| {
                                        viewer.write().go_to_image(i);
                                    },
                                }
                            }
                        }
                    }
                }

                div { class: "modal-body",
                    div { class: "modal-title-row",
                        div {
                            span { class: "eyebrow", "{project.category}" }
                            h2 { class: "section-title", "{project.title}" }
                        }
                        div { class: "modal-links",
                            if let Some(url) = project.live_url.as_ref() {
                                a {
                                    class: "btn btn-primary",
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Live Demo"
                                }
                            }
                            if let Some(url) = project.github_url.as_ref() {
                                a {
                                    class: "btn btn-outline",
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "View Code"
                                }
                            }
                        }
                    }

                    div { class: "modal-block",
                        h4 { "About the Project" }
                        p { "{project.detail_text()}" }
                    }

                    div { class: "modal-columns",
                        if !project.features.is_empty() {
                            div { class: "modal-block",
                                h4 { "Key Features" }
                                ul {
                                    for feature in project.features.iter() {
                                        li { key: "{feature}", "{feature}" }
                                    }
                                }
                            }
                        }
                        if !project.technologies.is_empty() {
                            div { class: "modal-block",
                                h4 { "Technologies" }
                                div { class: "tech-list",
                                    for tech in project.technologies.iter() {
                                        span { key: "{tech}", "{tech}" }
                                    }
                                }
                            }
                        }
                    }

                    if let Some(challenges) = project.challenges.as_ref() {
                        div { class: "modal-block challenges",
                            h4 { "Challenges & Solutions" }
                            p { "{challenges}" }
                        }
                    }

                    div { class: "tag-list",
                        for tag in project.tags.iter() {
                            span { key: "{tag}", class: "tag", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}
