//! Command dispatch for the CLI.

use crate::prompt::StdinConfirm;
use crate::Command;
use anyhow::{bail, Context, Result};
use scene_switch_core::{SceneIndex, SceneSwitchingTool, ShortcutField};
use std::path::Path;
use tracing::{debug, warn};

/// Parse a `NAME=PATH` scene mapping argument.
pub fn parse_scene_arg(arg: &str) -> std::result::Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok((name.trim().to_string(), path.trim().to_string()))
        }
        _ => Err(format!("expected NAME=PATH, got '{}'", arg)),
    }
}

/// Build the scene snapshot from `--scene` entries and the `--scenes` file.
///
/// Entries given on the command line take precedence over the file.
pub fn load_scenes(file: Option<&Path>, extra: Vec<(String, String)>) -> Result<SceneIndex> {
    let mut scenes = SceneIndex::from_pairs(extra);

    if let Some(path) = file {
        let loaded = SceneIndex::load(path)
            .with_context(|| format!("Failed to load scene mapping {}", path.display()))?;
        scenes.extend(loaded);
    }

    debug!("Scene snapshot has {} scenes", scenes.len());
    Ok(scenes)
}

/// Convert a 1-based position from the command line to an index.
fn to_index(position: usize) -> Result<usize> {
    match position.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("positions start at 1"),
    }
}

pub(crate) fn run(mut tool: SceneSwitchingTool, command: Command) -> Result<()> {
    match command {
        Command::List => {
            list(&tool);
            Ok(())
        }
        Command::Status => {
            let status = tool.status();
            println!(
                "Scenes in project: {}   Shortcuts: {}",
                status.scene_count, status.shortcut_count
            );
            Ok(())
        }
        Command::Add { label, scene } => {
            let index = tool.on_add();
            if let Some(label) = label {
                tool.on_edit_field(index, ShortcutField::MenuLabel, label)?;
            }
            if let Some(scene) = scene {
                tool.on_edit_field(index, ShortcutField::SceneName, scene)?;
            }
            finish(tool)
        }
        Command::Remove { position, yes } => {
            let index = to_index(position)?;
            let removed = if yes {
                tool.on_remove(index, &mut |_: &str| true)?
            } else {
                tool.on_remove(index, &mut StdinConfirm::new())?
            };

            if removed {
                finish(tool)
            } else {
                println!("Cancelled");
                Ok(())
            }
        }
        Command::Move { from, to } => {
            tool.on_reorder(to_index(from)?, to_index(to)?)?;
            finish(tool)
        }
        Command::SetLabel { position, label } => {
            tool.on_edit_field(to_index(position)?, ShortcutField::MenuLabel, label)?;
            finish(tool)
        }
        Command::SetScene { position, scene } => {
            tool.on_edit_field(to_index(position)?, ShortcutField::SceneName, scene)?;
            finish(tool)
        }
        Command::Validate => match tool.validate() {
            Ok(()) => {
                println!("OK: {} shortcuts", tool.store().len());
                Ok(())
            }
            Err(report) => {
                eprintln!("{}", report);
                bail!("{} shortcut(s) failed validation", report.issues().len())
            }
        },
        Command::Generate => {
            let script = tool.on_save_requested()?;
            for skipped in &script.skipped {
                warn!(
                    "'{}' was left out: scene '{}' has no asset path",
                    skipped.menu_label, skipped.scene_name
                );
            }
            println!(
                "Generated {} menu entries in {}",
                script.entries.len(),
                tool.menu_script_path().display()
            );
            Ok(())
        }
    }
}

fn list(tool: &SceneSwitchingTool) {
    if tool.store().is_empty() {
        println!("No scene shortcuts configured");
        return;
    }

    for (i, shortcut) in tool.store().iter().enumerate() {
        let scene = if shortcut.scene_name.is_empty() {
            "<none>".to_string()
        } else if tool.scenes().contains(&shortcut.scene_name) {
            shortcut.scene_name.clone()
        } else {
            format!("{} (missing)", shortcut.scene_name)
        };
        println!("{}. {} -> {}", i + 1, shortcut.menu_label, scene);
    }
}

/// Close the session and fail if the edited list could not be saved.
fn finish(tool: SceneSwitchingTool) -> Result<()> {
    if let Err(report) = tool.validate() {
        eprintln!("{}", report);
    }
    if !tool.close() {
        bail!("changes were not saved");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_scene_arg() {
        assert_eq!(
            parse_scene_arg("Main=Assets/Scenes/Main.unity").unwrap(),
            ("Main".to_string(), "Assets/Scenes/Main.unity".to_string())
        );
        assert!(parse_scene_arg("Main").is_err());
        assert!(parse_scene_arg("=Assets/Main.unity").is_err());
        assert!(parse_scene_arg("Main=").is_err());
    }

    #[test]
    fn test_command_line_scenes_take_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scenes.json");
        fs::write(
            &path,
            r#"{ "Main": "Assets/Old/Main.unity", "Level": "Assets/Level.unity" }"#,
        )
        .unwrap();

        let scenes = load_scenes(
            Some(path.as_path()),
            vec![("Main".to_string(), "Assets/Main.unity".to_string())],
        )
        .unwrap();

        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes.path_of("Main"), Some("Assets/Main.unity"));
    }

    #[test]
    fn test_to_index_rejects_zero() {
        assert_eq!(to_index(1).unwrap(), 0);
        assert!(to_index(0).is_err());
    }

    #[test]
    fn test_add_then_generate() {
        let temp_dir = TempDir::new().unwrap();
        let scenes = SceneIndex::from_pairs([("Main", "Assets/Main.unity")]);

        let tool = SceneSwitchingTool::open(temp_dir.path(), scenes.clone());
        run(
            tool,
            Command::Add {
                label: Some("Main Menu".to_string()),
                scene: Some("Main".to_string()),
            },
        )
        .unwrap();

        let tool = SceneSwitchingTool::open(temp_dir.path(), scenes);
        assert_eq!(tool.store().len(), 1);
        run(tool, Command::Generate).unwrap();

        let menu = fs::read_to_string(temp_dir.path().join("SceneSwitchingMenu.cs")).unwrap();
        assert!(menu.contains("Quick Switch/Main Menu\", priority = 100)]"));
    }

    #[test]
    fn test_invalid_add_is_not_saved() {
        let temp_dir = TempDir::new().unwrap();
        let tool = SceneSwitchingTool::open(temp_dir.path(), SceneIndex::new());

        let result = run(
            tool,
            Command::Add {
                label: None,
                scene: Some("Nowhere".to_string()),
            },
        );

        assert!(result.is_err());
        let tool = SceneSwitchingTool::open(temp_dir.path(), SceneIndex::new());
        assert!(tool.store().is_empty());
    }
}
