use dioxus::prelude::*;
use tracing::error;

use common::{
    PortfolioConfig,
    gallery::{GalleryFilter, GalleryView},
    viewer::ESCAPE_KEY,
};
use content::{Catalog, CategoryFilter, Section};

use crate::{
    components::{modal::ProjectModal, project_card::ProjectCard},
    web::dom::{BodyScroll, EscapeKeys, PageViewer},
};

#[derive(Clone, PartialEq, Props)]
struct CategoryTabProps {
    filter: CategoryFilter,
    active: CategoryFilter,
    count: usize,
    gallery: Signal<GalleryFilter>,
}

#[component]
fn CategoryTab(props: CategoryTabProps) -> Element {
    let filter = props.filter;
    let mut gallery = props.gallery;

    rsx! {
        button {
            class: if props.active == filter { "category-tab active" } else { "category-tab" },
            onclick: move |_| {
                gallery.write().select_category(filter);
            },
            "{filter.label()} ({props.count})"
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    let config = use_context::<PortfolioConfig>();
    let catalog = use_context::<Catalog>();

    let tabs = use_hook(move || {
        config.gallery.filters().unwrap_or_else(|err| {
            error!("bad gallery tabs, using the defaults: {err}");
            CategoryFilter::options()
        })
    });

    let gallery = use_signal(move || GalleryFilter::new(catalog));

    let escape_presses = use_signal(|| 0u32);
    let mut viewer = use_signal(move || PageViewer::new(BodyScroll, EscapeKeys::new(escape_presses)));

    // a no-op once the viewer is already closed
    use_effect(move || {
        if escape_presses() > 0 {
            viewer.write().handle_key(ESCAPE_KEY);
        }
    });

    let state = gallery.read();
    let active = state.active_category();
    let visible = state.visible_count();

    rsx! {
        section { id: Section::Projects.anchor(), class: "section",
            div { class: "container",
                div { class: "section-header",
                    span { class: "eyebrow", "Portfolio" }
                    h2 { class: "section-title", "Selected work" }
                    div { class: "section-rule" }
                    p { class: "section-lead",
                        "A selection of projects across full-stack builds, front-end work, WordPress sites and QA."
                    }
                }

                div { class: "category-tabs",
                    for filter in tabs.iter().copied() {
                        CategoryTab {
                            key: "{filter}",
                            filter,
                            active,
                            count: state.catalog().count(filter),
                            gallery,
                        }
                    }
                }

                match state.view() {
                    GalleryView::Grid(projects) => rsx! {
                        div { class: "project-grid",
                            for project in projects {
                                ProjectCard {
                                    key: "{project.id}",
                                    project: project.clone(),
                                    on_view: move |project| viewer.write().open(project),
                                }
                            }
                        }
                    },
                    GalleryView::Empty(_) => rsx! {
                        div { class: "empty-state",
                            p { "No projects found in this category" }
                        }
                    },
                }

                p { class: "project-count", "Displaying {visible} projects" }
            }

            ProjectModal { viewer }
        }
    }
}
