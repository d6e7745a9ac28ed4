//! Scene shortcut list management.
//!
//! Provides:
//! - The shortcut record type and its JSON layout
//! - An ordered store with add/remove/reorder/edit operations
//! - Validation of labels and target scenes before anything is persisted

mod record;
mod store;
mod validation;

pub use record::{ShortcutField, ShortcutRecord};
pub use store::ShortcutStore;
pub use validation::{validate_shortcuts, ValidationIssue, ValidationReport, ValidationRule};
