//! Theme store: light/dark mode, persisted.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, KeyValueStoreExt, keys};

/// Display theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme: {s}")),
        }
    }
}

/// Persisted theme preference.
pub struct ThemeStore {
    storage: Arc<dyn KeyValueStore>,
    mode: RwLock<Theme>,
}

impl ThemeStore {
    /// Load the theme from storage, defaulting to light.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let mode = match storage.get_json::<Theme>(keys::THEME) {
            Ok(mode) => mode.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("failed to load persisted theme: {e}");
                Theme::default()
            }
        };

        Self {
            storage,
            mode: RwLock::new(mode),
        }
    }

    /// The current mode.
    #[must_use]
    pub fn current(&self) -> Theme {
        *self
            .mode
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Whether dark mode is active.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.current() == Theme::Dark
    }

    /// Set a specific mode and persist it.
    pub fn set(&self, mode: Theme) {
        {
            let mut current = self
                .mode
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            *current = mode;
        }
        if let Err(e) = self.storage.put_json(keys::THEME, &mode) {
            tracing::warn!("failed to persist theme: {e}");
        }
    }

    /// Switch between light and dark; returns the new mode.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_light() {
        let store = ThemeStore::load(Arc::new(MemoryStore::new()));
        assert_eq!(store.current(), Theme::Light);
        assert!(!store.is_dark());
    }

    #[test]
    fn test_toggle_roundtrip() {
        let store = ThemeStore::load(Arc::new(MemoryStore::new()));
        assert_eq!(store.toggle(), Theme::Dark);
        assert!(store.is_dark());
        assert_eq!(store.toggle(), Theme::Light);
    }

    #[test]
    fn test_persists_across_reload() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

        let store = ThemeStore::load(Arc::clone(&storage));
        store.set(Theme::Dark);
        drop(store);

        let reloaded = ThemeStore::load(storage);
        assert!(reloaded.is_dark());
    }

    #[test]
    fn test_stored_as_plain_mode_string() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let store = ThemeStore::load(Arc::clone(&storage));
        store.set(Theme::Dark);

        assert_eq!(storage.get_raw(keys::THEME).unwrap().as_deref(), Some("\"dark\""));
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
