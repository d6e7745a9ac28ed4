//! Generated editor menu for scene shortcuts.

mod generator;

pub use generator::{
    escape_string_literal, MenuEntry, MenuScript, MenuScriptGenerator, SkippedShortcut,
};
