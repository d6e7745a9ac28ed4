//! Editing session for the scene shortcut list.
//!
//! [`SceneSwitchingTool`] owns the store and the two files it maps to, and
//! exposes the callbacks a front end needs: add, remove (after
//! confirmation), reorder, edit a field, and save.

use crate::config::{MenuConfig, PathsConfig};
use crate::menu::{MenuScript, MenuScriptGenerator};
use crate::scenes::SceneIndex;
use crate::shortcut::{ShortcutField, ShortcutStore, ValidationReport};
use crate::{Result, SceneSwitchError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Counts shown in the editor header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    /// Scenes known to the scene index.
    pub scene_count: usize,
    /// Shortcuts in the list.
    pub shortcut_count: usize,
}

/// One open editing session.
pub struct SceneSwitchingTool {
    config_path: PathBuf,
    menu_script_path: PathBuf,
    store: ShortcutStore,
    scenes: SceneIndex,
    generator: MenuScriptGenerator,
}

impl SceneSwitchingTool {
    /// Open the tool rooted at `tool_dir`.
    ///
    /// The configuration lives at `Resources/Config/SceneSwitchingConfig.json`
    /// and the menu script at `SceneSwitchingMenu.cs`, both under `tool_dir`.
    pub fn open(tool_dir: impl AsRef<Path>, scenes: SceneIndex) -> Self {
        let tool_dir = tool_dir.as_ref();
        let config_path = tool_dir
            .join(PathsConfig::CONFIG_DIR)
            .join(PathsConfig::CONFIG_FILE_NAME);
        let menu_script_path = tool_dir.join(PathsConfig::MENU_SCRIPT_FILE_NAME);

        let store = ShortcutStore::load(&config_path);

        Self {
            config_path,
            menu_script_path,
            store,
            scenes,
            generator: MenuScriptGenerator::new(),
        }
    }

    /// Replace the menu script generator.
    pub fn with_generator(mut self, generator: MenuScriptGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn menu_script_path(&self) -> &Path {
        &self.menu_script_path
    }

    pub fn store(&self) -> &ShortcutStore {
        &self.store
    }

    pub fn scenes(&self) -> &SceneIndex {
        &self.scenes
    }

    /// Swap in a fresh scene snapshot from the host.
    pub fn refresh_scenes(&mut self, scenes: SceneIndex) {
        self.scenes = scenes;
    }

    pub fn status(&self) -> ToolStatus {
        ToolStatus {
            scene_count: self.scenes.len(),
            shortcut_count: self.store.len(),
        }
    }

    /// Append a shortcut labelled "Scene <n>" with no scene selected.
    pub fn on_add(&mut self) -> usize {
        let label = format!("{} {}", MenuConfig::DEFAULT_LABEL_PREFIX, self.store.len() + 1);
        self.store.add(label, "")
    }

    /// Remove the shortcut at `index` if `confirm` approves.
    ///
    /// Returns whether the shortcut was removed.
    pub fn on_remove<C>(&mut self, index: usize, confirm: &mut C) -> Result<bool>
    where
        C: Confirm + ?Sized,
    {
        let label = match self.store.get(index) {
            Some(record) => record.menu_label.clone(),
            None => {
                return Err(SceneSwitchError::IndexOutOfRange {
                    index,
                    len: self.store.len(),
                })
            }
        };

        if !confirm.confirm(&format!("Delete scene shortcut '{}'?", label)) {
            return Ok(false);
        }

        self.store.remove(index)?;
        info!("Removed scene shortcut '{}'", label);
        Ok(true)
    }

    pub fn on_reorder(&mut self, from: usize, to: usize) -> Result<()> {
        self.store.reorder(from, to)
    }

    pub fn on_edit_field(
        &mut self,
        index: usize,
        field: ShortcutField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.store.edit_field(index, field, value)
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationReport> {
        self.store.validate(&self.scenes)
    }

    /// Regenerate the menu script, then save the configuration.
    ///
    /// Validation failures block both writes.
    pub fn on_save_requested(&mut self) -> Result<MenuScript> {
        self.validate()?;

        let script = self.generator.generate(&self.store, &self.scenes);
        script.write_to_file(&self.menu_script_path)?;

        self.save_configuration()?;
        Ok(script)
    }

    /// Validate and save the configuration file only.
    pub fn save_configuration(&self) -> Result<()> {
        self.store
            .save(&self.config_path, &self.scenes, MenuConfig::KEEP_CONFIG_BACKUP)
    }

    /// End the session, saving the configuration if it is valid.
    ///
    /// Invalid edits are logged and discarded. Returns whether anything was
    /// saved.
    pub fn close(self) -> bool {
        match self.save_configuration() {
            Ok(()) => true,
            Err(e) => {
                warn!("Shortcut changes were not saved: {}", e);
                false
            }
        }
    }
}
