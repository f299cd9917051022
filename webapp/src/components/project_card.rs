use dioxus::prelude::*;

use content::ProjectRecord;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: ProjectRecord,
    on_view: EventHandler<ProjectRecord>,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let on_view = props.on_view;

    rsx! {
        div { class: "project-card",
            div { class: "project-card-image",
                img {
                    src: "{project.image}",
                    alt: "{project.title}",
                    loading: "lazy",
                }
            }
            div { class: "project-card-info",
                span { class: "category", "{project.category}" }
                h3 { class: "title", "{project.title}" }
                p { class: "description", "{project.description}" }

                div { class: "tag-list",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }

                div { class: "project-card-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: {
                            let project = project.clone();
                            move |_| on_view.call(project.clone())
                        },
                        "View Details"
                    }
                    if let Some(url) = project.live_url.as_ref() {
                        a {
                            class: "btn btn-primary",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Live Site"
                        }
                    }
                }
            }
        }
    }
}
