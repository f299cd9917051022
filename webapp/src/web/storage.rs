use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

use common::{host::ThemeStore, theme::Theme};

pub const THEME_KEY: &str = "theme";

pub fn set_local_storage<T>(prefix: &str, key: &str, value: T)
where
    T: Serialize,
{
    let key = format!("{prefix}_{key}");

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a missing key is not an error, it just means nothing was saved yet
pub fn get_local_storage<T>(prefix: &str, key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("{prefix}_{key}");

    match LocalStorage::get(key.clone()) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

// the saved light/dark choice
//
// an unreadable entry is treated as no choice at all, so the page falls back to
// the system preference instead of failing
#[derive(Clone, Debug, PartialEq)]
pub struct LocalThemeStore {
    prefix: String,
}

impl LocalThemeStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        LocalThemeStore {
            prefix: prefix.into(),
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        get_local_storage(&self.prefix, THEME_KEY).ok().flatten()
    }

    fn save(&mut self, theme: Theme) {
        set_local_storage(&self.prefix, THEME_KEY, theme)
    }
}
