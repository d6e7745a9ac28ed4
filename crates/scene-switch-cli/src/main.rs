//! Scene Switch CLI - command-line editor for scene shortcut lists.
//!
//! Each invocation is one editing session: it loads the configuration,
//! applies one command, and saves the list again if it is still valid.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scene-switch")]
#[command(about = "Maintain scene shortcuts and regenerate the scene switching menu")]
struct Args {
    /// Tool directory holding Resources/Config and the generated menu script
    #[arg(long, default_value = ".")]
    tool_dir: PathBuf,

    /// JSON file mapping scene names to asset paths
    #[arg(long)]
    scenes: Option<PathBuf>,

    /// Extra scene mapping entry, NAME=PATH (repeatable)
    #[arg(long = "scene", value_name = "NAME=PATH", value_parser = commands::parse_scene_arg)]
    scene: Vec<(String, String)>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Show all shortcuts
    List,
    /// Show scene and shortcut counts
    Status,
    /// Append a shortcut
    Add {
        /// Menu label; defaults to "Scene <n>"
        label: Option<String>,
        /// Target scene name
        scene: Option<String>,
    },
    /// Remove the shortcut at a 1-based position
    Remove {
        position: usize,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Move a shortcut to another 1-based position
    Move { from: usize, to: usize },
    /// Change the menu label of a shortcut
    SetLabel { position: usize, label: String },
    /// Change the target scene of a shortcut
    SetScene { position: usize, scene: String },
    /// Check the list without writing anything
    Validate,
    /// Regenerate the menu script and save the list
    Generate,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging; RUST_LOG overrides the flag.
    let log_level = if args.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let scenes = commands::load_scenes(args.scenes.as_deref(), args.scene)?;
    let tool = scene_switch_core::SceneSwitchingTool::open(&args.tool_dir, scenes);

    commands::run(tool, args.command)
}
