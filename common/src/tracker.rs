use content::Section;
use tracing::debug;
use web_time::Instant;

use crate::{
    config::TrackerConfig,
    host::Viewport,
    listeners::{Listeners, Subscription},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackerEvent {
    SectionChanged(Section),
    ScrolledChanged(bool),
}

// who gets to write the active section
//
// a nav click locks the indicator on its target until the smooth scroll has had
// time to finish; scroll ticks inside that window leave the section alone
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackerMode {
    Automatic,
    Locked { section: Section, until: Instant },
}

// section-activity tracker
//
// decides which page section the navbar highlights.  on every scroll tick each
// section's visible share of the viewport is measured and the largest share wins,
// provided it clears the configured minimum; near the top of the page the hero
// always wins
#[derive(Debug)]
pub struct SectionTracker {
    config: TrackerConfig,
    active: Section,
    mode: TrackerMode,
    scrolled: bool,
    listeners: Listeners<TrackerEvent>,
}

impl SectionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        SectionTracker {
            config,
            active: Section::first(),
            mode: TrackerMode::Automatic,
            scrolled: false,
            listeners: Listeners::new(),
        }
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn mode(&self) -> TrackerMode {
        self.mode
    }

    pub fn is_locked(&self, now: Instant) -> bool {
        match self.mode {
            TrackerMode::Locked { until, .. } => now < until,
            TrackerMode::Automatic => false,
        }
    }

    // drives the navbar background, independent of the lock
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    // returns true if the active section changed
    pub fn on_scroll(&mut self, viewport: &impl Viewport, now: Instant) -> bool {
        let scrolled = viewport.scroll_y() > self.config.scrolled_px;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            self.listeners.notify(&TrackerEvent::ScrolledChanged(scrolled));
        }

        if let TrackerMode::Locked { section, until } = self.mode {
            if now < until {
                return false;
            }

            debug!({ section = %section }, "navigation lock expired");
            self.mode = TrackerMode::Automatic;
        }

        match resolve_section(viewport, &self.config) {
            Some(section) => self.set_active(section),
            None => false,
        }
    }

    // same computation as a scroll tick, used once on mount
    pub fn refresh(&mut self, viewport: &impl Viewport, now: Instant) -> bool {
        self.on_scroll(viewport, now)
    }

    pub fn on_link_activated(&mut self, section: Section, now: Instant) -> bool {
        let until = now + self.config.lock_duration();
        debug!({ section = %section }, "navigation link activated");

        self.mode = TrackerMode::Locked { section, until };
        self.set_active(section)
    }

    pub fn clear_lock(&mut self) {
        self.mode = TrackerMode::Automatic;
    }

    pub fn subscribe(&self, listener: impl Fn(&TrackerEvent) + 'static) -> Subscription<TrackerEvent> {
        self.listeners.subscribe(listener)
    }

    fn set_active(&mut self, section: Section) -> bool {
        if section == self.active {
            return false;
        }

        self.active = section;
        self.listeners.notify(&TrackerEvent::SectionChanged(section));
        true
    }
}

// the scroll-driven candidate, or None when nothing is visible enough to replace
// the current section
//
// ties go to the section that comes first on the page; sections the viewport
// cannot locate are left out
pub fn resolve_section(viewport: &impl Viewport, config: &TrackerConfig) -> Option<Section> {
    if viewport.scroll_y() < config.top_band_px {
        return Some(Section::first());
    }

    let height = viewport.height();
    let mut best: Option<(Section, f64)> = None;

    for section in Section::ALL {
        let Some(rect) = viewport.section_rect(section) else {
            continue;
        };

        let fraction = rect.visible_fraction(height);
        match best {
            Some((_, top)) if fraction <= top => {}
            _ => best = Some((section, fraction)),
        }
    }

    best.filter(|(_, fraction)| *fraction > config.min_visible_fraction)
        .map(|(section, _)| section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SectionRect;
    use std::{cell::RefCell, collections::HashMap, rc::Rc, time::Duration};

    #[derive(Default)]
    struct FakeViewport {
        scroll_y: f64,
        height: f64,
        rects: HashMap<Section, SectionRect>,
    }

    impl FakeViewport {
        fn at(scroll_y: f64) -> Self {
            FakeViewport {
                scroll_y,
                height: 1000.0,
                rects: HashMap::new(),
            }
        }

        fn with(mut self, section: Section, top: f64, bottom: f64) -> Self {
            self.rects.insert(section, SectionRect::new(top, bottom));
            self
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn section_rect(&self, section: Section) -> Option<SectionRect> {
            self.rects.get(&section).copied()
        }
    }

    fn tracker() -> SectionTracker {
        SectionTracker::new(TrackerConfig::default())
    }

    #[test]
    fn starts_on_the_hero() {
        let t = tracker();
        assert_eq!(t.active_section(), Section::Hero);
        assert_eq!(t.mode(), TrackerMode::Automatic);
        assert!(!t.is_scrolled());
    }

    #[test]
    fn largest_visible_share_wins() {
        let mut t = tracker();
        let now = Instant::now();

        let vp = FakeViewport::at(1500.0)
            .with(Section::Hero, -1500.0, -700.0)
            .with(Section::About, -700.0, 300.0)
            .with(Section::Projects, 300.0, 1800.0);

        assert!(t.on_scroll(&vp, now));
        assert_eq!(t.active_section(), Section::Projects);
    }

    #[test]
    fn top_band_forces_the_hero() {
        let mut t = tracker();
        let now = Instant::now();
        t.on_link_activated(Section::About, now);
        t.clear_lock();

        // the hero is nearly scrolled past yet about fills the screen
        let vp = FakeViewport::at(50.0)
            .with(Section::Hero, -50.0, 60.0)
            .with(Section::About, 60.0, 1400.0);

        t.on_scroll(&vp, now);
        assert_eq!(t.active_section(), Section::Hero);
    }

    #[test]
    fn below_threshold_keeps_previous_section() {
        let mut t = tracker();
        let now = Instant::now();
        t.on_scroll(
            &FakeViewport::at(900.0).with(Section::About, -100.0, 900.0),
            now,
        );
        assert_eq!(t.active_section(), Section::About);

        // every section under 15% of the viewport
        let vp = FakeViewport::at(2000.0)
            .with(Section::About, -900.0, 100.0)
            .with(Section::Projects, 850.0, 2000.0);
        assert!(!t.on_scroll(&vp, now));
        assert_eq!(t.active_section(), Section::About);
    }

    #[test]
    fn exactly_at_threshold_is_not_enough() {
        let vp = FakeViewport::at(500.0).with(Section::Contact, 850.0, 1200.0);
        assert_eq!(resolve_section(&vp, &TrackerConfig::default()), None);

        let vp = FakeViewport::at(500.0).with(Section::Contact, 849.0, 1200.0);
        assert_eq!(
            resolve_section(&vp, &TrackerConfig::default()),
            Some(Section::Contact)
        );
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let vp = FakeViewport::at(3000.0).with(Section::Contact, 0.0, 600.0);
        assert_eq!(
            resolve_section(&vp, &TrackerConfig::default()),
            Some(Section::Contact)
        );

        let empty = FakeViewport::at(3000.0);
        assert_eq!(resolve_section(&empty, &TrackerConfig::default()), None);
    }

    #[test]
    fn ties_go_to_the_earlier_section() {
        let vp = FakeViewport::at(800.0)
            .with(Section::About, -500.0, 500.0)
            .with(Section::Projects, 500.0, 1500.0);
        assert_eq!(
            resolve_section(&vp, &TrackerConfig::default()),
            Some(Section::About)
        );
    }

    #[test]
    fn contact_click_holds_through_the_lock() {
        let mut t = tracker();
        let start = Instant::now();

        assert!(t.on_link_activated(Section::Contact, start));
        assert_eq!(t.active_section(), Section::Contact);
        assert!(t.is_locked(start));

        // the smooth scroll passes over projects on its way down
        let passing = FakeViewport::at(2400.0)
            .with(Section::Projects, -200.0, 900.0)
            .with(Section::Contact, 900.0, 1600.0);
        for ms in [100, 500, 1000, 1499] {
            assert!(!t.on_scroll(&passing, start + Duration::from_millis(ms)));
            assert_eq!(t.active_section(), Section::Contact);
        }
    }

    #[test]
    fn lock_expires_on_the_next_scroll() {
        let mut t = tracker();
        let start = Instant::now();
        t.on_link_activated(Section::Contact, start);

        let later = start + Duration::from_millis(1500);
        assert!(!t.is_locked(later));

        let vp = FakeViewport::at(2400.0)
            .with(Section::Projects, -200.0, 900.0)
            .with(Section::Contact, 900.0, 1600.0);
        assert!(t.on_scroll(&vp, later));
        assert_eq!(t.active_section(), Section::Projects);
        assert_eq!(t.mode(), TrackerMode::Automatic);
    }

    #[test]
    fn scrolled_flag_updates_while_locked() {
        let mut t = tracker();
        let start = Instant::now();
        t.on_link_activated(Section::About, start);

        t.on_scroll(&FakeViewport::at(51.0), start);
        assert!(t.is_scrolled());
        t.on_scroll(&FakeViewport::at(10.0), start);
        assert!(!t.is_scrolled());
        assert_eq!(t.active_section(), Section::About);
    }

    #[test]
    fn lock_duration_follows_config() {
        let config = TrackerConfig {
            lock_duration_ms: 200,
            ..TrackerConfig::default()
        };
        let mut t = SectionTracker::new(config);
        let start = Instant::now();
        t.on_link_activated(Section::Projects, start);

        assert!(t.is_locked(start + Duration::from_millis(199)));
        assert!(!t.is_locked(start + Duration::from_millis(200)));
    }

    #[test]
    fn listeners_hear_section_and_background_changes() {
        let mut t = tracker();
        let events = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let events = events.clone();
            t.subscribe(move |e| events.borrow_mut().push(*e))
        };

        let now = Instant::now();
        t.on_scroll(
            &FakeViewport::at(900.0).with(Section::About, 0.0, 1000.0),
            now,
        );
        t.on_link_activated(Section::About, now);

        assert_eq!(
            *events.borrow(),
            vec![
                TrackerEvent::ScrolledChanged(true),
                TrackerEvent::SectionChanged(Section::About),
            ]
        );
    }
}
