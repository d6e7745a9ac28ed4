//! File persistence helpers.
//!
//! This module provides:
//! - Atomic JSON reads and writes for the shortcut configuration
//! - Atomic text writes for the generated menu script
//! - Optional `.bak` copies of the previous file

mod atomic;

pub use atomic::{atomic_read_json, atomic_write_json, atomic_write_text, backup_path};
