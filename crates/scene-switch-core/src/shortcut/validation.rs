//! Shortcut list validation.
//!
//! Each record is checked in a fixed order and reports only its first failing
//! rule:
//! 1. menu label is not blank
//! 2. scene name is not blank
//! 3. scene name is known to the scene index
//! 4. menu label does not repeat an earlier record's label
//!
//! Every failing record is reported, so one pass shows everything to fix.

use super::record::ShortcutRecord;
use crate::scenes::KnownScenes;
use std::collections::HashSet;
use std::fmt;

/// The rule a shortcut record broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    EmptyLabel,
    EmptySceneName,
    UnknownScene { scene_name: String },
    DuplicateLabel { menu_label: String },
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationRule::EmptyLabel => write!(f, "menu label must not be empty"),
            ValidationRule::EmptySceneName => write!(f, "no scene selected"),
            ValidationRule::UnknownScene { scene_name } => {
                write!(f, "scene '{}' does not exist", scene_name)
            }
            ValidationRule::DuplicateLabel { menu_label } => {
                write!(f, "menu label '{}' is duplicated", menu_label)
            }
        }
    }
}

/// A single failing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// 1-based position of the record in the list.
    pub position: usize,
    pub rule: ValidationRule,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shortcut #{}: {}", self.position, self.rule)
    }
}

/// All issues found in one validation pass, in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Issue reported for the record at a 1-based position, if any.
    pub fn issue_at(&self, position: usize) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.position == position)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Validate records against the set of known scenes.
pub fn validate_shortcuts<S>(
    records: &[ShortcutRecord],
    scenes: &S,
) -> std::result::Result<(), ValidationReport>
where
    S: KnownScenes + ?Sized,
{
    let mut seen_labels: HashSet<&str> = HashSet::new();
    let mut issues = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let label_blank = record.menu_label.trim().is_empty();

        let rule = if label_blank {
            Some(ValidationRule::EmptyLabel)
        } else if record.scene_name.trim().is_empty() {
            Some(ValidationRule::EmptySceneName)
        } else if !scenes.contains_scene(&record.scene_name) {
            Some(ValidationRule::UnknownScene {
                scene_name: record.scene_name.clone(),
            })
        } else if seen_labels.contains(record.menu_label.as_str()) {
            Some(ValidationRule::DuplicateLabel {
                menu_label: record.menu_label.clone(),
            })
        } else {
            None
        };

        // A label counts as taken even when its record failed another rule.
        if !label_blank {
            seen_labels.insert(record.menu_label.as_str());
        }

        if let Some(rule) = rule {
            issues.push(ValidationIssue {
                position: i + 1,
                rule,
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationReport::new(issues))
    }
}
