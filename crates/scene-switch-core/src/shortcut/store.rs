//! Ordered shortcut list with JSON persistence.

use super::record::{ShortcutConfigFile, ShortcutField, ShortcutRecord};
use super::validation::{validate_shortcuts, ValidationReport};
use crate::metadata::{atomic_read_json, atomic_write_json};
use crate::scenes::KnownScenes;
use crate::{Result, SceneSwitchError};
use std::path::Path;
use tracing::{debug, error, info};

/// In-memory shortcut list.
///
/// Order matters: it decides the order and priority of the generated menu
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutStore {
    shortcuts: Vec<ShortcutRecord>,
}

impl ShortcutStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from existing records, keeping their order.
    pub fn from_records(shortcuts: Vec<ShortcutRecord>) -> Self {
        Self { shortcuts }
    }

    /// Load the store from a configuration file.
    ///
    /// A missing, unreadable or malformed file yields an empty store. The
    /// failure is logged and never returned.
    pub fn load(path: &Path) -> Self {
        match atomic_read_json::<ShortcutConfigFile>(path) {
            Ok(Some(config)) => {
                debug!(
                    "Loaded {} scene shortcuts from {}",
                    config.scene_shortcuts.len(),
                    path.display()
                );
                Self::from_records(config.scene_shortcuts)
            }
            Ok(None) => {
                debug!("No shortcut configuration at {}", path.display());
                Self::new()
            }
            Err(e) => {
                error!("Failed to load shortcut configuration: {}", e);
                Self::new()
            }
        }
    }

    /// Validate and write the store to `path`.
    ///
    /// Nothing is written if validation fails.
    pub fn save<S>(&self, path: &Path, scenes: &S, keep_backup: bool) -> Result<()>
    where
        S: KnownScenes + ?Sized,
    {
        self.validate(scenes)?;

        let config = ShortcutConfigFile {
            scene_shortcuts: self.shortcuts.clone(),
        };
        atomic_write_json(path, &config, keep_backup)?;

        info!("Saved {} scene shortcuts to {}", self.len(), path.display());
        Ok(())
    }

    /// Check every record against the known scenes.
    pub fn validate<S>(&self, scenes: &S) -> std::result::Result<(), ValidationReport>
    where
        S: KnownScenes + ?Sized,
    {
        validate_shortcuts(&self.shortcuts, scenes)
    }

    /// Append a record and return its index.
    pub fn add(&mut self, menu_label: impl Into<String>, scene_name: impl Into<String>) -> usize {
        self.shortcuts
            .push(ShortcutRecord::new(menu_label, scene_name));
        self.shortcuts.len() - 1
    }

    /// Remove and return the record at `index`.
    pub fn remove(&mut self, index: usize) -> Result<ShortcutRecord> {
        self.check_index(index)?;
        Ok(self.shortcuts.remove(index))
    }

    /// Move the record at `from` so that it ends up at `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        if from != to {
            let record = self.shortcuts.remove(from);
            self.shortcuts.insert(to, record);
        }
        Ok(())
    }

    /// Overwrite one field of the record at `index`.
    pub fn edit_field(
        &mut self,
        index: usize,
        field: ShortcutField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.check_index(index)?;
        self.shortcuts[index].set(field, value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&ShortcutRecord> {
        self.shortcuts.get(index)
    }

    pub fn shortcuts(&self) -> &[ShortcutRecord] {
        &self.shortcuts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShortcutRecord> {
        self.shortcuts.iter()
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.shortcuts.len() {
            Ok(())
        } else {
            Err(SceneSwitchError::IndexOutOfRange {
                index,
                len: self.shortcuts.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a ShortcutStore {
    type Item = &'a ShortcutRecord;
    type IntoIter = std::slice::Iter<'a, ShortcutRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::SceneIndex;
    use std::fs;
    use tempfile::TempDir;

    fn scenes() -> SceneIndex {
        SceneIndex::from_pairs([
            ("test1", "Assets/Scenes/test1.unity"),
            ("test2", "Assets/Scenes/test2.unity"),
            ("test3", "Assets/Scenes/test3.unity"),
        ])
    }

    fn labels(store: &ShortcutStore) -> Vec<&str> {
        store.iter().map(|r| r.menu_label.as_str()).collect()
    }

    fn three() -> ShortcutStore {
        let mut store = ShortcutStore::new();
        store.add("A", "test1");
        store.add("B", "test2");
        store.add("C", "test3");
        store
    }

    #[test]
    fn test_add_appends() {
        let mut store = ShortcutStore::new();
        assert_eq!(store.add("A", "test1"), 0);
        assert_eq!(store.add("", ""), 1);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some(&ShortcutRecord::default()));
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut store = three();

        let removed = store.remove(1).unwrap();

        assert_eq!(removed.menu_label, "B");
        assert_eq!(labels(&store), vec!["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = three();
        let err = store.remove(3).unwrap_err();
        assert!(matches!(
            err,
            SceneSwitchError::IndexOutOfRange { index: 3, len: 3 }
        ));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_reorder_forward_and_back() {
        let mut store = three();

        store.reorder(0, 2).unwrap();
        assert_eq!(labels(&store), vec!["B", "C", "A"]);

        store.reorder(2, 0).unwrap();
        assert_eq!(labels(&store), vec!["A", "B", "C"]);

        store.reorder(1, 1).unwrap();
        assert_eq!(labels(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_out_of_range_leaves_store_untouched() {
        let mut store = three();
        assert!(store.reorder(0, 3).is_err());
        assert_eq!(labels(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_edit_field() {
        let mut store = three();
        store
            .edit_field(2, ShortcutField::SceneName, "test1")
            .unwrap();
        store
            .edit_field(2, ShortcutField::MenuLabel, "Again")
            .unwrap();

        assert_eq!(store.get(2), Some(&ShortcutRecord::new("Again", "test1")));
        assert!(store.edit_field(5, ShortcutField::MenuLabel, "x").is_err());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Config").join("shortcuts.json");
        let mut store = three();
        store.add("场景1", "test1");

        store.save(&path, &scenes(), false).unwrap();
        let loaded = ShortcutStore::load(&path);

        assert_eq!(loaded, store);
    }

    #[test]
    fn test_save_blocked_by_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shortcuts.json");
        let mut store = three();
        store.add("A", "test2");

        let err = store.save(&path, &scenes(), false).unwrap_err();

        assert!(err.validation_report().is_some());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = ShortcutStore::load(&temp_dir.path().join("absent.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{\"SceneShortcuts\": [").unwrap();

        let store = ShortcutStore::load(&path);
        assert!(store.is_empty());
    }
}
