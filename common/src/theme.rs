use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    host::ThemeStore,
    listeners::{Listeners, Subscription},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

// light/dark preference
//
// an explicit choice is persisted through the store and always wins.  until the
// visitor makes one, the theme follows the system color scheme, including changes
// to it while the page is open
#[derive(Debug)]
pub struct ThemePreference<S: ThemeStore> {
    store: S,
    theme: Theme,
    saved: bool,
    listeners: Listeners<Theme>,
}

impl<S: ThemeStore> ThemePreference<S> {
    pub fn new(store: S, prefers_dark: bool) -> Self {
        let saved = store.load();
        let theme = match saved {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        };

        debug!({ theme = %theme, saved = saved.is_some() }, "resolved theme");

        ThemePreference {
            store,
            theme,
            saved: saved.is_some(),
            listeners: Listeners::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn has_saved_preference(&self) -> bool {
        self.saved
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.store.save(theme);
        self.saved = true;
        self.apply(theme);
    }

    // prefers-color-scheme changed; ignored once the visitor has chosen
    pub fn system_changed(&mut self, prefers_dark: bool) -> bool {
        if self.saved {
            return false;
        }

        let theme = if prefers_dark { Theme::Dark } else { Theme::Light };
        self.apply(theme)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn subscribe(&self, listener: impl Fn(&Theme) + 'static) -> Subscription<Theme> {
        self.listeners.subscribe(listener)
    }

    fn apply(&mut self, theme: Theme) -> bool {
        if theme == self.theme {
            return false;
        }

        debug!({ theme = %theme }, "theme changed");
        self.theme = theme;
        self.listeners.notify(&theme);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStore {
        value: Option<Theme>,
        writes: usize,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<Theme> {
            self.value
        }

        fn save(&mut self, theme: Theme) {
            self.value = Some(theme);
            self.writes += 1;
        }
    }

    fn stored(theme: Theme) -> MemoryStore {
        MemoryStore {
            value: Some(theme),
            writes: 0,
        }
    }

    #[test]
    fn saved_preference_beats_system() {
        let pref = ThemePreference::new(stored(Theme::Light), true);
        assert_eq!(pref.theme(), Theme::Light);
        assert!(pref.has_saved_preference());
    }

    #[test]
    fn falls_back_to_system_then_light() {
        assert_eq!(
            ThemePreference::new(MemoryStore::default(), true).theme(),
            Theme::Dark
        );
        assert_eq!(
            ThemePreference::new(MemoryStore::default(), false).theme(),
            Theme::Light
        );
    }

    #[test]
    fn resolving_does_not_write() {
        let pref = ThemePreference::new(MemoryStore::default(), true);
        assert_eq!(pref.store().writes, 0);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut pref = ThemePreference::new(MemoryStore::default(), false);

        assert_eq!(pref.toggle(), Theme::Dark);
        assert_eq!(pref.store().value, Some(Theme::Dark));
        assert_eq!(pref.toggle(), Theme::Light);
        assert_eq!(pref.store().value, Some(Theme::Light));
        assert_eq!(pref.store().writes, 2);
    }

    #[test]
    fn system_changes_only_apply_without_a_choice() {
        let mut pref = ThemePreference::new(MemoryStore::default(), false);
        assert!(pref.system_changed(true));
        assert_eq!(pref.theme(), Theme::Dark);

        pref.toggle();
        assert!(!pref.system_changed(true));
        assert_eq!(pref.theme(), Theme::Light);
    }

    #[test]
    fn serializes_lowercase() {
        #[derive(Serialize)]
        struct Doc {
            theme: Theme,
        }
        let doc = toml::to_string(&Doc { theme: Theme::Dark }).unwrap();
        assert_eq!(doc.trim(), "theme = \"dark\"");
    }
}
