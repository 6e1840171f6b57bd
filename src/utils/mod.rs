//! Utility functions and helpers.
//!
//! # Submodules
//!
//! - [`paths`]: Path manipulation and entry naming

/// Path manipulation and resolution utilities
pub mod paths;

pub use paths::{ensure_parent_dirs, entry_name, indent};
