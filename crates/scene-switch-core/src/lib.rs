//! Scene Switch Core - headless library behind the scene switching tool.
//!
//! Keeps an ordered list of named scene shortcuts, persists it as JSON, and
//! regenerates an editor script with one menu entry per shortcut that opens
//! its scene.
//!
//! # Example
//!
//! ```rust,no_run
//! use scene_switch_core::{SceneIndex, SceneSwitchingTool, ShortcutField};
//!
//! fn main() -> scene_switch_core::Result<()> {
//!     let scenes = SceneIndex::from_pairs([("test1", "Assets/Scenes/test1.unity")]);
//!     let mut tool = SceneSwitchingTool::open("Assets/Editor/SceneSwitching", scenes);
//!
//!     let index = tool.on_add();
//!     tool.on_edit_field(index, ShortcutField::SceneName, "test1")?;
//!
//!     let script = tool.on_save_requested()?;
//!     println!("Generated {} menu entries", script.entries.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod metadata;
pub mod scenes;
pub mod shortcut;
pub mod tool;

pub use error::{Result, SceneSwitchError};
pub use menu::{MenuEntry, MenuScript, MenuScriptGenerator, SkippedShortcut};
pub use scenes::{KnownScenes, SceneIndex};
pub use shortcut::{
    ShortcutField, ShortcutRecord, ShortcutStore, ValidationIssue, ValidationReport,
    ValidationRule,
};
pub use tool::{Confirm, SceneSwitchingTool, ToolStatus};
