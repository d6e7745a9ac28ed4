//! Shortcut records and their on-disk layout.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A named binding from a menu label to a target scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShortcutRecord {
    /// Label shown in the menu.
    pub menu_label: String,
    /// Logical name of the target scene.
    pub scene_name: String,
}

impl ShortcutRecord {
    pub fn new(menu_label: impl Into<String>, scene_name: impl Into<String>) -> Self {
        Self {
            menu_label: menu_label.into(),
            scene_name: scene_name.into(),
        }
    }

    /// Set the given field.
    pub fn set(&mut self, field: ShortcutField, value: impl Into<String>) {
        match field {
            ShortcutField::MenuLabel => self.menu_label = value.into(),
            ShortcutField::SceneName => self.scene_name = value.into(),
        }
    }
}

/// Editable fields of a [`ShortcutRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutField {
    MenuLabel,
    SceneName,
}

impl fmt::Display for ShortcutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutField::MenuLabel => write!(f, "menu label"),
            ShortcutField::SceneName => write!(f, "scene name"),
        }
    }
}

/// Root structure of the configuration file.
///
/// Field names match the files written by earlier versions of the tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ShortcutConfigFile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scene_shortcuts: Vec<ShortcutRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ShortcutRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ShortcutRecord>>::deserialize(deserializer)?.unwrap_or_default())
}
