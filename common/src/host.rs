use content::Section;

// host traits
//
// the state machines never touch the dom directly.  the webapp implements these
// over web-sys, the tests implement them over plain structs

// global page scrolling, see scroll_lock.rs
pub trait ScrollHost {
    fn suppress_scroll(&mut self);
    fn restore_scroll(&mut self);
}

// the document-level keydown listener used for escape-to-close
//
// attach and detach are only ever called alternately by the viewer
pub trait KeyHost {
    fn attach_escape(&mut self);
    fn detach_escape(&mut self);
}

// vertical extent of a section, in viewport coordinates (px, top of viewport = 0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        SectionRect { top, bottom }
    }

    // share of the viewport height this rect covers, in 0.0..=1.0
    pub fn visible_fraction(&self, viewport_height: f64) -> f64 {
        if viewport_height <= 0.0 {
            return 0.0;
        }

        let visible = self.bottom.min(viewport_height) - self.top.max(0.0);
        (visible.max(0.0) / viewport_height).min(1.0)
    }
}

pub trait Viewport {
    fn scroll_y(&self) -> f64;

    fn height(&self) -> f64;

    // None when the anchor is not (yet) in the document
    fn section_rect(&self, section: Section) -> Option<SectionRect>;
}

pub trait ThemeStore {
    fn load(&self) -> Option<crate::theme::Theme>;

    fn save(&mut self, theme: crate::theme::Theme);
}
