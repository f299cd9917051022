use dioxus::prelude::*;
use tracing::{error, warn};
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{Document, Event, EventTarget, KeyboardEvent, Window};

use common::{
    host::{KeyHost, ScrollHost, SectionRect, Viewport},
    theme::{Theme, ThemePreference},
    viewer::{DetailViewer, ESCAPE_KEY},
};
use content::Section;

use crate::web::storage::LocalThemeStore;

pub type PageViewer = DetailViewer<BodyScroll, EscapeKeys>;

pub type PageTheme = ThemePreference<LocalThemeStore>;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))
}

fn document() -> anyhow::Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::Error::msg("window has no document"))
}

// a dom event listener that is removed when dropped
//
// the closure has to outlive the registration, so both live here together
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub fn new(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);

        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| anyhow::Error::msg(format!("failed to add {event} listener: {err:?}")))?;

        Ok(DomListener {
            target,
            event,
            closure,
        })
    }

    pub fn on_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> anyhow::Result<Self> {
        DomListener::new(window()?.into(), event, handler)
    }

    pub fn on_document(event: &'static str, handler: impl FnMut(Event) + 'static) -> anyhow::Result<Self> {
        DomListener::new(document()?.into(), event, handler)
    }

    // fires whenever the system color scheme flips
    pub fn on_color_scheme(handler: impl FnMut(Event) + 'static) -> anyhow::Result<Self> {
        let query = window()?
            .match_media(DARK_SCHEME_QUERY)
            .map_err(|err| anyhow::Error::msg(format!("matchMedia failed: {err:?}")))?
            .ok_or_else(|| anyhow::Error::msg("matchMedia is not supported"))?;

        DomListener::new(query.into(), "change", handler)
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            error!({ event = self.event }, "failed to remove listener: {err:?}");
        }
    }
}

// page scrolling, toggled through the body's overflow style
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyScroll;

impl BodyScroll {
    fn set_overflow(value: &str) {
        let body = match document().map(|d| d.body()) {
            Ok(Some(body)) => body,
            Ok(None) => {
                warn!("document has no body, leaving scrolling alone");
                return;
            }
            Err(err) => {
                error!("{err}");
                return;
            }
        };

        if let Err(err) = body.style().set_property("overflow", value) {
            error!("failed to set body overflow to {value}: {err:?}");
        }
    }
}

impl ScrollHost for BodyScroll {
    fn suppress_scroll(&mut self) {
        BodyScroll::set_overflow("hidden");
    }

    fn restore_scroll(&mut self) {
        BodyScroll::set_overflow("auto");
    }
}

// document-level escape listener
//
// the dom callback only bumps a counter; whoever owns the viewer watches the
// counter and calls handle_key.  closing the viewer from inside the callback
// would drop the closure that is currently running
pub struct EscapeKeys {
    presses: Signal<u32>,
    listener: Option<DomListener>,
}

impl EscapeKeys {
    pub fn new(presses: Signal<u32>) -> Self {
        EscapeKeys {
            presses,
            listener: None,
        }
    }
}

impl KeyHost for EscapeKeys {
    fn attach_escape(&mut self) {
        let mut presses = self.presses;

        let listener = DomListener::on_document("keydown", move |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };

            if event.key() == ESCAPE_KEY {
                *presses.write() += 1;
            }
        });

        match listener {
            Ok(listener) => self.listener = Some(listener),
            Err(err) => error!("failed to attach escape listener: {err}"),
        }
    }

    fn detach_escape(&mut self) {
        self.listener = None;
    }
}

// the live window, read fresh on every call
pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn new() -> anyhow::Result<Self> {
        Ok(DomViewport {
            window: window()?,
            document: document()?,
        })
    }
}

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn section_rect(&self, section: Section) -> Option<SectionRect> {
        let element = self.document.get_element_by_id(section.anchor())?;
        let rect = element.get_bounding_client_rect();
        Some(SectionRect::new(rect.top(), rect.bottom()))
    }
}

pub fn prefers_dark() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

// the stylesheet keys its dark palette off a class on the root element
pub fn apply_theme(theme: Theme) {
    let root = match document().map(|d| d.document_element()) {
        Ok(Some(root)) => root,
        Ok(None) => return,
        Err(err) => {
            error!("{err}");
            return;
        }
    };

    if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        error!("failed to apply {theme} theme: {err:?}");
    }
}
