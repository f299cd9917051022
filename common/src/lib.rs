// the portfolio state-machine core
//
// everything in here is plain data plus the host traits in host.rs, so it builds
// and tests on the native target.  the webapp wraps these types in signals and
// implements the host traits over the dom
pub mod carousel;
pub mod config;
pub mod gallery;
pub mod host;
pub mod listeners;
pub mod scroll_lock;
pub mod theme;
pub mod tracker;
pub mod viewer;

pub use config::PortfolioConfig;
pub use gallery::{GalleryEvent, GalleryFilter, GalleryView};
pub use theme::{Theme, ThemePreference};
pub use tracker::{SectionTracker, TrackerEvent, TrackerMode};
pub use viewer::{DetailViewer, ViewerEvent};
