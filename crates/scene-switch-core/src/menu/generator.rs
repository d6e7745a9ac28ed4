//! Menu script generation.
//!
//! Turns a shortcut list into a C# editor script with one `[MenuItem]`
//! method per shortcut. The output depends only on its inputs, so
//! regenerating an unchanged list leaves the file byte-identical.

use crate::config::MenuConfig;
use crate::metadata::atomic_write_text;
use crate::scenes::SceneIndex;
use crate::shortcut::ShortcutStore;
use crate::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// One emitted menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Index of the source shortcut in the store.
    pub index: usize,
    /// Full menu path, `<root>/<label>`.
    pub menu_path: String,
    pub priority: i32,
    /// Asset path opened by the action.
    pub scene_path: String,
}

/// A shortcut left out because its scene had no path at generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedShortcut {
    pub index: usize,
    pub menu_label: String,
    pub scene_name: String,
}

/// Result of a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuScript {
    /// Full source text of the script.
    pub content: String,
    pub entries: Vec<MenuEntry>,
    pub skipped: Vec<SkippedShortcut>,
}

impl MenuScript {
    /// Write the script to `path`.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        atomic_write_text(path, &self.content, false)?;
        info!(
            "Wrote scene menu with {} entries to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }
}

/// Generator for the scene switching menu script.
#[derive(Debug, Clone)]
pub struct MenuScriptGenerator {
    /// Menu path every entry is placed under.
    menu_root: String,
    namespace: String,
    class_name: String,
    /// Priority of the first shortcut; each following one adds 1.
    base_priority: i32,
}

impl Default for MenuScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuScriptGenerator {
    /// Create a generator with the default menu root, namespace and class.
    pub fn new() -> Self {
        Self {
            menu_root: MenuConfig::DEFAULT_MENU_ROOT.to_string(),
            namespace: MenuConfig::DEFAULT_NAMESPACE.to_string(),
            class_name: MenuConfig::DEFAULT_CLASS_NAME.to_string(),
            base_priority: MenuConfig::DEFAULT_BASE_PRIORITY,
        }
    }

    /// Set the menu root. Trailing `/` separators are dropped.
    pub fn with_menu_root(mut self, root: impl Into<String>) -> Self {
        self.menu_root = root.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the namespace of the generated class.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the name of the generated class.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the priority of the first menu entry.
    pub fn with_base_priority(mut self, base_priority: i32) -> Self {
        self.base_priority = base_priority;
        self
    }

    pub fn base_priority(&self) -> i32 {
        self.base_priority
    }

    /// Build the menu script for a validated store.
    ///
    /// A shortcut whose scene is missing from `scenes` is skipped rather than
    /// emitted. That can only happen when the scene vanished after validation;
    /// it is reported in [`MenuScript::skipped`] and logged. The skipped index
    /// still counts toward the priorities of later entries.
    pub fn generate(&self, store: &ShortcutStore, scenes: &SceneIndex) -> MenuScript {
        let mut entries = Vec::with_capacity(store.len());
        let mut skipped = Vec::new();

        for (index, shortcut) in store.iter().enumerate() {
            match scenes.path_of(&shortcut.scene_name) {
                Some(scene_path) => entries.push(MenuEntry {
                    index,
                    menu_path: self.menu_path(&shortcut.menu_label),
                    priority: self.base_priority.saturating_add(index as i32),
                    scene_path: scene_path.to_string(),
                }),
                None => {
                    warn!(
                        "Skipping shortcut #{} '{}': scene '{}' has no asset path",
                        index + 1,
                        shortcut.menu_label,
                        shortcut.scene_name
                    );
                    skipped.push(SkippedShortcut {
                        index,
                        menu_label: shortcut.menu_label.clone(),
                        scene_name: shortcut.scene_name.clone(),
                    });
                }
            }
        }

        let content = self.render(&entries);
        debug!(
            "Generated menu script: {} entries, {} skipped",
            entries.len(),
            skipped.len()
        );

        MenuScript {
            content,
            entries,
            skipped,
        }
    }

    fn menu_path(&self, label: &str) -> String {
        if self.menu_root.is_empty() {
            label.to_string()
        } else {
            format!("{}/{}", self.menu_root, label)
        }
    }

    /// Render the C# source text.
    fn render(&self, entries: &[MenuEntry]) -> String {
        let mut out = String::new();

        push_line(&mut out, 0, "using UnityEditor;");
        push_line(&mut out, 0, "using UnityEditor.SceneManagement;");
        push_line(&mut out, 0, "using UnityEngine;");
        out.push('\n');
        push_line(&mut out, 0, &format!("namespace {}", self.namespace));
        push_line(&mut out, 0, "{");
        push_line(&mut out, 1, &format!("public static class {}", self.class_name));
        push_line(&mut out, 1, "{");

        for entry in entries {
            push_line(
                &mut out,
                2,
                &format!(
                    "[MenuItem(\"{}\", priority = {})]",
                    escape_string_literal(&entry.menu_path),
                    entry.priority
                ),
            );
            push_line(
                &mut out,
                2,
                &format!("private static void SwitchTo_{}()", entry.index),
            );
            push_line(&mut out, 2, "{");
            push_line(
                &mut out,
                3,
                "if (EditorSceneManager.SaveCurrentModifiedScenesIfUserWantsTo())",
            );
            push_line(&mut out, 3, "{");
            push_line(
                &mut out,
                4,
                &format!(
                    "EditorSceneManager.OpenScene(\"{}\");",
                    escape_string_literal(&entry.scene_path)
                ),
            );
            push_line(&mut out, 3, "}");
            push_line(&mut out, 2, "}");
            out.push('\n');
        }

        push_line(&mut out, 1, "}");
        push_line(&mut out, 0, "}");
        out
    }
}

fn push_line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push_str("    ");
    }
    out.push_str(text);
    out.push('\n');
}

/// Escape text for a C# regular string literal.
pub fn escape_string_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcut::ShortcutRecord;
    use tempfile::TempDir;

    fn scenes() -> SceneIndex {
        SceneIndex::from_pairs([
            ("test1", "Assets/Scenes/test1.unity"),
            ("test2", "Assets/Scenes/test2.unity"),
        ])
    }

    fn sample_store() -> ShortcutStore {
        ShortcutStore::from_records(vec![
            ShortcutRecord::new("场景1", "test1"),
            ShortcutRecord::new("场景2", "test2"),
        ])
    }

    #[test]
    fn test_generate_two_scenes_exact_output() {
        let generator = MenuScriptGenerator::new()
            .with_menu_root("GB Tools/场景切换工具/快速切换")
            .with_namespace("GB.Tools.Editor");

        let script = generator.generate(&sample_store(), &scenes());

        let expected = r#"using UnityEditor;
using UnityEditor.SceneManagement;
using UnityEngine;

namespace GB.Tools.Editor
{
    public static class SceneSwitchingMenu
    {
        [MenuItem("GB Tools/场景切换工具/快速切换/场景1", priority = 100)]
        private static void SwitchTo_0()
        {
            if (EditorSceneManager.SaveCurrentModifiedScenesIfUserWantsTo())
            {
                EditorSceneManager.OpenScene("Assets/Scenes/test1.unity");
            }
        }

        [MenuItem("GB Tools/场景切换工具/快速切换/场景2", priority = 101)]
        private static void SwitchTo_1()
        {
            if (EditorSceneManager.SaveCurrentModifiedScenesIfUserWantsTo())
            {
                EditorSceneManager.OpenScene("Assets/Scenes/test2.unity");
            }
        }

    }
}
"#;
        assert_eq!(script.content, expected);
        assert!(script.skipped.is_empty());
    }

    #[test]
    fn test_priorities_follow_store_order() {
        let generator = MenuScriptGenerator::new().with_base_priority(20);
        let store = ShortcutStore::from_records(vec![
            ShortcutRecord::new("c", "test2"),
            ShortcutRecord::new("a", "test1"),
            ShortcutRecord::new("b", "test2"),
        ]);

        let script = generator.generate(&store, &scenes());

        let priorities: Vec<i32> = script.entries.iter().map(|e| e.priority).collect();
        assert_eq!(priorities, vec![20, 21, 22]);
        assert_eq!(script.entries[0].menu_path, format!("{}/c", MenuConfig::DEFAULT_MENU_ROOT));
        assert_eq!(script.content.matches("[MenuItem(").count(), 3);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = MenuScriptGenerator::new();
        let first = generator.generate(&sample_store(), &scenes());
        let second = generator.generate(&sample_store(), &scenes());
        assert_eq!(first.content, second.content);
    }

    #[test]
    fn test_missing_scene_is_skipped() {
        let store = ShortcutStore::from_records(vec![
            ShortcutRecord::new("One", "test1"),
            ShortcutRecord::new("Gone", "deleted"),
            ShortcutRecord::new("Two", "test2"),
        ]);

        let script = MenuScriptGenerator::new().generate(&store, &scenes());

        assert_eq!(script.entries.len(), 2);
        assert_eq!(
            script.skipped,
            vec![SkippedShortcut {
                index: 1,
                menu_label: "Gone".to_string(),
                scene_name: "deleted".to_string(),
            }]
        );
        assert!(!script.content.contains("Gone"));
        assert!(!script.content.contains("SwitchTo_1()"));
        // The skipped slot still consumes its priority.
        assert_eq!(script.entries[1].priority, 102);
        assert!(script.content.contains("SwitchTo_2()"));
    }

    #[test]
    fn test_empty_store_emits_empty_class() {
        let script = MenuScriptGenerator::new().generate(&ShortcutStore::new(), &scenes());
        assert!(script.entries.is_empty());
        assert!(script.content.contains("public static class SceneSwitchingMenu"));
        assert!(!script.content.contains("MenuItem"));
    }

    #[test]
    fn test_labels_and_paths_are_escaped() {
        let scenes = SceneIndex::from_pairs([("odd", "Assets\\Odd \"Scene\".unity")]);
        let store = ShortcutStore::from_records(vec![ShortcutRecord::new("Say \"hi\"", "odd")]);

        let script = MenuScriptGenerator::new()
            .with_menu_root("Root/")
            .generate(&store, &scenes);

        assert!(script
            .content
            .contains(r#"[MenuItem("Root/Say \"hi\"", priority = 100)]"#));
        assert!(script
            .content
            .contains(r#"EditorSceneManager.OpenScene("Assets\\Odd \"Scene\".unity");"#));
    }

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(escape_string_literal("a\nb\tc"), "a\\nb\\tc");
        assert_eq!(escape_string_literal("\u{1b}"), "\\u001b");
        assert_eq!(escape_string_literal("场景"), "场景");
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Editor").join("SceneSwitchingMenu.cs");

        let script = MenuScriptGenerator::new().generate(&sample_store(), &scenes());
        script.write_to_file(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), script.content);
    }
}
