//! Scene name to asset path snapshot.
//!
//! Scene discovery belongs to the host editor. The tool only sees a
//! read-only snapshot of what the host found, either built in memory or
//! loaded from a JSON object of `{ "<scene name>": "<asset path>" }`.

use crate::{Result, SceneSwitchError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Anything that can answer "is this scene name known?".
pub trait KnownScenes {
    fn contains_scene(&self, name: &str) -> bool;
}

/// Read-only mapping from scene name to asset path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneIndex {
    scenes: BTreeMap<String, String>,
}

impl SceneIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from `(name, path)` pairs.
    ///
    /// Several assets may share a scene name; the first path seen wins.
    pub fn from_pairs<I, N, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        let mut index = Self::new();
        for (name, path) in pairs {
            index.insert(name, path);
        }
        index
    }

    /// Load an index from a JSON object file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| SceneSwitchError::io_with_path(e, path))?;

        let index: SceneIndex =
            serde_json::from_str(&contents).map_err(|e| SceneSwitchError::Json {
                message: format!("Failed to parse scene index {}: {}", path.display(), e),
                source: Some(e),
            })?;

        debug!("Loaded {} scenes from {}", index.len(), path.display());
        Ok(index)
    }

    /// Add a scene unless the name is already present.
    ///
    /// Returns `false` if an earlier entry kept the name.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) -> bool {
        let name = name.into();
        if self.scenes.contains_key(&name) {
            return false;
        }
        self.scenes.insert(name, path.into());
        true
    }

    /// Merge another index into this one; existing names are kept.
    pub fn extend(&mut self, other: SceneIndex) {
        for (name, path) in other.scenes {
            self.insert(name, path);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Asset path for a scene name.
    pub fn path_of(&self, name: &str) -> Option<&str> {
        self.scenes.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Scene names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }
}

impl KnownScenes for SceneIndex {
    fn contains_scene(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl KnownScenes for HashSet<String> {
    fn contains_scene(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl KnownScenes for BTreeSet<String> {
    fn contains_scene(&self, name: &str) -> bool {
        self.contains(name)
    }
}
