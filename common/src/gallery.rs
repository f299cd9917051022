use content::{Catalog, CategoryFilter, ProjectRecord};
use tracing::{debug, warn};

use crate::listeners::{Listeners, Subscription};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryEvent {
    CategoryChanged(CategoryFilter),
}

// what the grid should render
//
// an empty selection gets its own variant so the view has to handle it explicitly
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryView<'a> {
    Grid(Vec<&'a ProjectRecord>),
    Empty(CategoryFilter),
}

// gallery filter
//
// holds the selected tab and the derived list of visible projects.  the list is
// stored as catalog indices and rebuilt with a single pass on every selection,
// so it is always in catalog order
#[derive(Debug)]
pub struct GalleryFilter {
    catalog: Catalog,
    active: CategoryFilter,
    visible: Vec<usize>,
    listeners: Listeners<GalleryEvent>,
}

impl GalleryFilter {
    pub fn new(catalog: Catalog) -> Self {
        let mut filter = GalleryFilter {
            catalog,
            active: CategoryFilter::All,
            visible: Vec::new(),
            listeners: Listeners::new(),
        };
        filter.recompute();
        filter
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_category(&self) -> CategoryFilter {
        self.active
    }

    // returns true if the active tab changed
    pub fn select_category(&mut self, filter: CategoryFilter) -> bool {
        let changed = self.active != filter;
        self.active = filter;
        self.recompute();

        if changed {
            debug!({ category = %filter, visible = self.visible.len() }, "gallery category changed");
            self.listeners.notify(&GalleryEvent::CategoryChanged(filter));
        }

        changed
    }

    // tab labels come from the rendered buttons; anything unrecognized is ignored
    pub fn select_category_str(&mut self, label: &str) -> bool {
        match label.parse::<CategoryFilter>() {
            Ok(filter) => self.select_category(filter),
            Err(err) => {
                warn!("ignoring gallery selection: {err}");
                false
            }
        }
    }

    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        let projects = self.catalog.projects();
        self.visible.iter().map(|&i| &projects[i]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn view(&self) -> GalleryView<'_> {
        if self.visible.is_empty() {
            GalleryView::Empty(self.active)
        } else {
            GalleryView::Grid(self.visible_projects())
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&GalleryEvent) + 'static) -> Subscription<GalleryEvent> {
        self.listeners.subscribe(listener)
    }

    fn recompute(&mut self) {
        let active = self.active;
        self.visible = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, p)| active.matches(p.category))
            .map(|(i, _)| i)
            .collect();
    }
}
