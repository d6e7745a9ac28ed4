//! Centralized configuration for the scene switching tool.
//!
//! File layout under the tool directory and the defaults used when emitting
//! the menu script.

/// Directory and file names relative to the tool directory.
pub struct PathsConfig;

impl PathsConfig {
    pub const CONFIG_DIR: &'static str = "Resources/Config";
    pub const CONFIG_FILE_NAME: &'static str = "SceneSwitchingConfig.json";
    pub const MENU_SCRIPT_FILE_NAME: &'static str = "SceneSwitchingMenu.cs";
    pub const BACKUP_SUFFIX: &'static str = "bak";
}

/// Defaults for the generated menu script.
pub struct MenuConfig;

impl MenuConfig {
    pub const DEFAULT_MENU_ROOT: &'static str = "Tools/Scene Switching/Quick Switch";
    pub const DEFAULT_NAMESPACE: &'static str = "SceneSwitching.Editor";
    pub const DEFAULT_CLASS_NAME: &'static str = "SceneSwitchingMenu";
    pub const DEFAULT_BASE_PRIORITY: i32 = 100;
    /// Prefix for labels of shortcuts added from the editor ("Scene 3").
    pub const DEFAULT_LABEL_PREFIX: &'static str = "Scene";
    /// Keep a `.bak` copy of the previous configuration file on save.
    pub const KEEP_CONFIG_BACKUP: bool = true;
}
