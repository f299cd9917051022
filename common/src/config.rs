use std::time::Duration;

use anyhow::Result;
use content::CategoryFilter;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// portfolio configuration
//
// every field has a default, so an empty [config] table (or an empty document) is
// a valid configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PortfolioConfig {
    pub gallery: GalleryConfig,
    pub tracker: TrackerConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    // tab labels, in display order.  "All" or a category spelling
    pub categories: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            categories: CategoryFilter::options()
                .into_iter()
                .map(|f| f.label().to_owned())
                .collect(),
        }
    }
}

impl GalleryConfig {
    pub fn filters(&self) -> Result<Vec<CategoryFilter>> {
        self.categories.iter().map(|c| c.parse()).collect()
    }
}

// the tracker tunables
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    // a section needs strictly more than this share of the viewport height
    pub min_visible_fraction: f64,

    // how long a nav click pins the indicator
    pub lock_duration_ms: u64,

    // scroll offsets under this always highlight the first section
    pub top_band_px: f64,

    // offset past which the navbar gets its solid background
    pub scrolled_px: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            min_visible_fraction: 0.15,
            lock_duration_ms: 1500,
            top_band_px: 100.0,
            scrolled_px: 50.0,
        }
    }
}

impl TrackerConfig {
    pub fn lock_duration(&self) -> Duration {
        Duration::from_millis(self.lock_duration_ms)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    // prepended to every local storage key as "{prefix}_{key}"
    pub prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            prefix: String::from("portfolio"),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: PortfolioConfig,
}

impl PortfolioConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self> {
        debug!("parsing portfolio config");

        let data: TomlConfigFile = toml::from_str(doc)?;
        data.config.validate()?;

        debug!("successfully parsed portfolio config");
        Ok(data.config)
    }

    pub fn validate(&self) -> Result<()> {
        let tracker = &self.tracker;

        if !(0.0..=1.0).contains(&tracker.min_visible_fraction) {
            return Err(anyhow::Error::msg(format!(
                "tracker.min_visible_fraction must be within 0..=1, got {}",
                tracker.min_visible_fraction
            )));
        }

        if tracker.top_band_px < 0.0 || tracker.scrolled_px < 0.0 {
            return Err(anyhow::Error::msg(
                "tracker pixel offsets must not be negative",
            ));
        }

        let filters = self.gallery.filters()?;
        if filters.is_empty() {
            return Err(anyhow::Error::msg("gallery.categories must not be empty"));
        }

        if self.storage.prefix.is_empty() {
            return Err(anyhow::Error::msg("storage.prefix must not be empty"));
        }

        Ok(())
    }
}
