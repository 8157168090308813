//! Theme preference persistence.
//!
//! Same persistence contract as the history store, on its own file: the
//! stored value is a bare boolean, absent or unparseable state loads as
//! the light-mode default.

use crate::types::ThemePreference;
use crate::{storage, Result};
use std::path::Path;

impl ThemePreference {
    /// Load the persisted preference, defaulting to light mode when the
    /// file is missing or unparseable.
    pub fn load(path: &Path) -> Self {
        storage::load_or_default(path)
    }

    /// Persist the preference, overwriting any previous value. Called
    /// after every toggle.
    pub fn save(&self, path: &Path) -> Result<()> {
        storage::save_atomic(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("theme.json");

        let theme = ThemePreference { dark_mode: true };
        theme.save(&path).unwrap();

        assert_eq!(ThemePreference::load(&path), theme);

        let theme = theme.toggled();
        theme.save(&path).unwrap();
        assert_eq!(ThemePreference::load(&path), theme);
    }

    #[test]
    fn test_persisted_value_is_bare_boolean() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("theme.json");

        ThemePreference { dark_mode: true }.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "true");

        ThemePreference { dark_mode: false }.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "false");
    }

    #[test]
    fn test_load_missing_defaults_to_light() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert!(!ThemePreference::load(&path).dark_mode);
    }

    #[test]
    fn test_load_corrupt_defaults_to_light() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("theme.json");
        std::fs::write(&path, "definitely not a boolean").unwrap();

        assert!(!ThemePreference::load(&path).dark_mode);
    }
}
