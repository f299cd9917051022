#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{Level, error};

use common::PortfolioConfig;
use content::{Catalog, PersonalInfo};

mod web;
use web::{
    dom::{DomListener, PageTheme, apply_theme, prefers_dark},
    storage::LocalThemeStore,
};

mod components;
use components::navigation::NavBar;

mod sections;
use sections::{
    about::AboutSection, contact::ContactSection, footer::Footer, hero::HeroSection,
    projects::ProjectsSection,
};

const PORTFOLIO_CONFIG: &str = include_str!("../assets/portfolio.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the page still renders on bad data; it just falls back to built-in defaults and
// leaves the reason in the console
fn load_config() -> PortfolioConfig {
    PortfolioConfig::from_toml(PORTFOLIO_CONFIG).unwrap_or_else(|err| {
        error!("failed to parse portfolio config, using defaults: {err}");
        PortfolioConfig::default()
    })
}

fn load_catalog() -> Catalog {
    Catalog::bundled().unwrap_or_else(|err| {
        error!("failed to load project catalog: {err}");
        Catalog::default()
    })
}

fn load_personal() -> PersonalInfo {
    PersonalInfo::bundled().unwrap_or_else(|err| {
        error!("failed to load personal info: {err}");
        PersonalInfo::default()
    })
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(load_catalog);
    use_context_provider(load_personal);

    let theme = use_context_provider(move || {
        let store = LocalThemeStore::new(config.storage.prefix.clone());
        Signal::new(PageTheme::new(store, prefers_dark()))
    });

    use_effect(move || apply_theme(theme.read().theme()));

    // follow the system scheme until the visitor picks one
    use_hook(move || {
        let mut theme = theme;
        let listener = DomListener::on_color_scheme(move |_| {
            theme.write().system_changed(prefers_dark());
        })
        .map_err(|err| error!("not following the system color scheme: {err}"))
        .ok();

        Rc::new(listener)
    });

    rsx! {
        style { "{web::style::PORTFOLIO_STYLES}" }
        div { class: "page",
            NavBar {}
            main {
                HeroSection {}
                AboutSection {}
                ProjectsSection {}
                ContactSection {}
            }
            Footer {}
        }
    }
}
