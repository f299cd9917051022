use content::{ProjectId, ProjectRecord};
use tracing::debug;

use crate::{
    carousel::Carousel,
    host::{KeyHost, ScrollHost},
    listeners::{Listeners, Subscription},
    scroll_lock::ScrollLock,
};

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    Opened(ProjectId),
    Closed,
    ImageChanged(usize),
}

// Closed keeps the last project so an exit animation can still render it
#[derive(Clone, Debug, PartialEq)]
enum ViewerState {
    Closed { last: Option<ProjectRecord> },
    Open { project: ProjectRecord, carousel: Carousel },
}

// project detail viewer
//
// the modal over the gallery.  it is catalog scoped, any record can be opened
// regardless of the current gallery tab.  while open it holds the page scroll
// lock and the escape listener, and every way out (close, escape, drop) hands
// both back
#[derive(Debug)]
pub struct DetailViewer<S: ScrollHost, K: KeyHost> {
    state: ViewerState,
    scroll: ScrollLock<S>,
    keys: K,
    listening: bool,
    listeners: Listeners<ViewerEvent>,
}

impl<S: ScrollHost, K: KeyHost> DetailViewer<S, K> {
    pub fn new(scroll: S, keys: K) -> Self {
        DetailViewer {
            state: ViewerState::Closed { last: None },
            scroll: ScrollLock::new(scroll),
            keys,
            listening: false,
            listeners: Listeners::new(),
        }
    }

    // always lands on the first image, including when another project was open
    pub fn open(&mut self, project: ProjectRecord) {
        debug!({ project = %project.id }, "opening project viewer");

        let id = project.id.clone();
        let carousel = Carousel::new(project.image_count());
        self.state = ViewerState::Open { project, carousel };

        self.scroll.acquire();
        if !self.listening {
            self.keys.attach_escape();
            self.listening = true;
        }

        self.listeners.notify(&ViewerEvent::Opened(id));
    }

    // returns false if the viewer was already closed
    pub fn close(&mut self) -> bool {
        let state = std::mem::replace(&mut self.state, ViewerState::Closed { last: None });

        let was_open = match state {
            ViewerState::Open { project, .. } => {
                debug!({ project = %project.id }, "closing project viewer");
                self.state = ViewerState::Closed {
                    last: Some(project),
                };
                true
            }
            closed => {
                self.state = closed;
                false
            }
        };

        self.release();

        if was_open {
            self.listeners.notify(&ViewerEvent::Closed);
        }
        was_open
    }

    // keydown dispatch; only escape while open does anything
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.is_open() {
            return self.close();
        }
        false
    }

    pub fn next_image(&mut self) -> bool {
        self.move_cursor(Carousel::next)
    }

    pub fn previous_image(&mut self) -> bool {
        self.move_cursor(Carousel::previous)
    }

    pub fn go_to_image(&mut self, index: usize) -> bool {
        self.move_cursor(|c| c.go_to(index))
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    // the open project, or the one most recently closed
    pub fn selected_project(&self) -> Option<&ProjectRecord> {
        match &self.state {
            ViewerState::Open { project, .. } => Some(project),
            ViewerState::Closed { last } => last.as_ref(),
        }
    }

    pub fn current_image_index(&self) -> usize {
        match &self.state {
            ViewerState::Open { carousel, .. } => carousel.index(),
            ViewerState::Closed { .. } => 0,
        }
    }

    pub fn image_count(&self) -> usize {
        match &self.state {
            ViewerState::Open { carousel, .. } => carousel.len(),
            ViewerState::Closed { .. } => 0,
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        match &self.state {
            ViewerState::Open { project, carousel } => Some(project.image_at(carousel.index())),
            ViewerState::Closed { .. } => None,
        }
    }

    // forget the last closed project
    pub fn clear_selection(&mut self) {
        if let ViewerState::Closed { last } = &mut self.state {
            *last = None;
        }
    }

    pub fn holds_scroll_lock(&self) -> bool {
        self.scroll.is_held()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn scroll_host(&self) -> &S {
        self.scroll.host()
    }

    pub fn key_host(&self) -> &K {
        &self.keys
    }

    pub fn subscribe(&self, listener: impl Fn(&ViewerEvent) + 'static) -> Subscription<ViewerEvent> {
        self.listeners.subscribe(listener)
    }

    fn move_cursor(&mut self, step: impl FnOnce(&mut Carousel) -> bool) -> bool {
        let index = match &mut self.state {
            ViewerState::Open { carousel, .. } => {
                if !step(carousel) {
                    return false;
                }
                carousel.index()
            }
            ViewerState::Closed { .. } => return false,
        };

        self.listeners.notify(&ViewerEvent::ImageChanged(index));
        true
    }

    fn release(&mut self) {
        self.scroll.release();
        if self.listening {
            self.keys.detach_escape();
            self.listening = false;
        }
    }
}

impl<S: ScrollHost, K: KeyHost> Drop for DetailViewer<S, K> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gallery::tests::project, scroll_lock::tests::RecordingScroll};
    use content::Category;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Debug, Default)]
    struct RecordingKeys {
        attached: Rc<RefCell<i32>>,
        attach_calls: Rc<RefCell<usize>>,
    }

    impl KeyHost for RecordingKeys {
        fn attach_escape(&mut self) {
            *self.attached.borrow_mut() += 1;
            *self.attach_calls.borrow_mut() += 1;
        }

        fn detach_escape(&mut self) {
            *self.attached.borrow_mut() -= 1;
        }
    }

    type TestViewer = DetailViewer<RecordingScroll, RecordingKeys>;

    fn viewer() -> (TestViewer, RecordingScroll, RecordingKeys) {
        let scroll = RecordingScroll::default();
        let keys = RecordingKeys::default();
        (DetailViewer::new(scroll.clone(), keys.clone()), scroll, keys)
    }

    fn gallery_project() -> ProjectRecord {
        project("fs-1", Category::FullStack, &["a", "b", "c"])
    }

    #[test]
    fn starts_closed() {
        let (v, _, _) = viewer();
        assert!(!v.is_open());
        assert!(v.selected_project().is_none());
        assert_eq!(v.current_image(), None);
        assert!(!v.holds_scroll_lock());
    }

    #[test]
    fn open_selects_project_at_first_image() {
        let (mut v, _, keys) = viewer();
        let p = gallery_project();
        v.open(p.clone());

        assert!(v.is_open());
        assert_eq!(v.selected_project(), Some(&p));
        assert_eq!(v.current_image_index(), 0);
        assert_eq!(v.current_image(), Some("a"));
        assert!(v.holds_scroll_lock());
        assert!(v.is_listening());
        assert_eq!(*keys.attached.borrow(), 1);
    }

    #[test]
    fn next_wraps_after_last_image() {
        let (mut v, _, _) = viewer();
        v.open(gallery_project());

        v.next_image();
        assert_eq!(v.current_image_index(), 1);
        v.next_image();
        assert_eq!(v.current_image_index(), 2);
        v.next_image();
        assert_eq!(v.current_image_index(), 0);
    }

    #[test]
    fn previous_undoes_next() {
        let (mut v, _, _) = viewer();
        v.open(gallery_project());
        v.go_to_image(1);

        v.next_image();
        v.previous_image();
        assert_eq!(v.current_image_index(), 1);

        v.go_to_image(0);
        v.previous_image();
        assert_eq!(v.current_image_index(), 2);
    }

    #[test]
    fn single_image_projects_do_not_navigate() {
        let (mut v, _, _) = viewer();
        v.open(project("fe-1", Category::FrontEnd, &[]));

        assert!(!v.next_image());
        assert!(!v.previous_image());
        assert_eq!(v.current_image_index(), 0);
        assert_eq!(v.current_image(), Some("/fe-1.jpg"));

        v.open(project("fe-2", Category::FrontEnd, &["only"]));
        assert!(!v.next_image());
        assert_eq!(v.current_image_index(), 0);
    }

    #[test]
    fn go_to_image_clamps_out_of_range() {
        let (mut v, _, _) = viewer();
        v.open(gallery_project());
        v.go_to_image(42);
        assert_eq!(v.current_image_index(), 2);
    }

    #[test]
    fn reopening_resets_the_carousel() {
        let (mut v, _, _) = viewer();
        v.open(gallery_project());
        v.next_image();
        v.next_image();

        let other = project("fs-2", Category::FullStack, &["x", "y", "z", "w"]);
        v.open(other.clone());
        assert_eq!(v.selected_project(), Some(&other));
        assert_eq!(v.current_image_index(), 0);
    }

    #[test]
    fn close_releases_lock_once_after_repeated_opens() {
        let (mut v, scroll, keys) = viewer();
        v.open(gallery_project());
        v.open(gallery_project());
        v.open(project("qa-1", Category::Qa, &[]));

        assert!(v.close());
        assert!(!v.is_open());
        assert!(!v.holds_scroll_lock());
        assert!(!v.is_listening());

        assert_eq!(*scroll.calls.borrow(), vec!["suppress", "restore"]);
        assert_eq!(*keys.attach_calls.borrow(), 1);
        assert_eq!(*keys.attached.borrow(), 0);
    }

    #[test]
    fn close_keeps_the_last_project_readable() {
        let (mut v, _, _) = viewer();
        let p = gallery_project();
        v.open(p.clone());
        v.next_image();
        v.close();

        assert_eq!(v.selected_project(), Some(&p));
        assert_eq!(v.current_image_index(), 0);
        assert_eq!(v.current_image(), None);

        v.clear_selection();
        assert!(v.selected_project().is_none());
    }

    #[test]
    fn closing_twice_is_harmless() {
        let (mut v, scroll, _) = viewer();
        assert!(!v.close());
        v.open(gallery_project());
        assert!(v.close());
        assert!(!v.close());
        assert_eq!(*scroll.calls.borrow(), vec!["suppress", "restore"]);
    }

    #[test]
    fn escape_closes_an_open_viewer() {
        let (mut v, _, _) = viewer();
        v.open(gallery_project());

        assert!(!v.handle_key("Enter"));
        assert!(v.is_open());

        assert!(v.handle_key(ESCAPE_KEY));
        assert!(!v.is_open());
        assert!(!v.holds_scroll_lock());
    }

    #[test]
    fn escape_while_closed_changes_nothing() {
        let (mut v, scroll, keys) = viewer();
        assert!(!v.handle_key(ESCAPE_KEY));
        assert!(!v.is_open());
        assert!(scroll.calls.borrow().is_empty());
        assert_eq!(*keys.attach_calls.borrow(), 0);
    }

    #[test]
    fn navigation_while_closed_is_ignored() {
        let (mut v, _, _) = viewer();
        assert!(!v.next_image());
        assert!(!v.previous_image());
        assert!(!v.go_to_image(1));
    }

    #[test]
    fn drop_cleans_up_an_open_viewer() {
        let (mut v, scroll, keys) = viewer();
        v.open(gallery_project());
        drop(v);

        assert_eq!(*scroll.calls.borrow(), vec!["suppress", "restore"]);
        assert_eq!(*keys.attached.borrow(), 0);
    }

    #[test]
    fn listeners_see_the_lifecycle() {
        let (mut v, _, _) = viewer();
        let events = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let events = events.clone();
            v.subscribe(move |e| events.borrow_mut().push(e.clone()))
        };

        v.open(gallery_project());
        v.next_image();
        v.handle_key(ESCAPE_KEY);
        v.handle_key(ESCAPE_KEY);

        assert_eq!(
            *events.borrow(),
            vec![
                ViewerEvent::Opened("fs-1".to_owned()),
                ViewerEvent::ImageChanged(1),
                ViewerEvent::Closed,
            ]
        );
    }
}
