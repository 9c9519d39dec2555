// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-crate debug flags
//!
//! The binaries accept `--debug <crate-name>` (repeatable) and `--debug-all`;
//! this module turns those into a tracing filter.

use std::collections::BTreeSet;

use crate::KNOWN_CRATES;

/// Crates for which debug logging was requested
///
/// # Example
/// ```rust
/// use perceptron_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::new(vec!["perceptron-learning".to_string()], false);
/// assert!(flags.is_enabled("perceptron-learning"));
/// assert_eq!(flags.to_filter_string("info"), "perceptron_learning=debug,info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Build flags from crate names; `all` enables every known crate
    pub fn new<I>(crates: I, all: bool) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut enabled_crates: BTreeSet<String> = crates
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if all {
            enabled_crates.extend(KNOWN_CRATES.iter().map(|name| name.to_string()));
        }

        Self { enabled_crates }
    }

    /// Check if debug is enabled for a specific crate
    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    /// Check if debug is enabled for any crate
    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// Names passed in that are not workspace crates
    pub fn unknown_crates(&self) -> Vec<&str> {
        self.enabled_crates
            .iter()
            .map(String::as_str)
            .filter(|name| !KNOWN_CRATES.contains(name))
            .collect()
    }

    /// Get log level for a crate
    pub fn log_level(&self, crate_name: &str) -> tracing::Level {
        if self.is_enabled(crate_name) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Create a tracing filter from debug flags
    ///
    /// Tracing targets use the Rust module path, so `perceptron-learning`
    /// becomes `perceptron_learning`. The base level applies to everything
    /// else. Format: `"perceptron_learning=debug,info"`.
    pub fn to_filter_string(&self, base_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .map(|name| format!("{}=debug", name.replace('-', "_")))
            .collect();
        filters.push(base_level.to_string());
        filters.join(",")
    }
}

/// Generate help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        "Debug flags:\n  --debug-all              Enable debug logging for all crates\n  --debug <crate-name>     Enable debug logging for one crate (repeatable)\n\nAvailable crates:\n  {}\n",
        KNOWN_CRATES.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crate_flag() {
        let flags = CrateDebugFlags::new(vec!["perceptron-learning".to_string()], false);
        assert!(flags.is_enabled("perceptron-learning"));
        assert!(!flags.is_enabled("perceptron-charts"));
    }

    #[test]
    fn test_debug_all() {
        let flags = CrateDebugFlags::new(Vec::new(), true);
        for crate_name in KNOWN_CRATES {
            assert!(flags.is_enabled(crate_name), "{} should be enabled", crate_name);
        }
    }

    #[test]
    fn test_filter_string() {
        let flags = CrateDebugFlags::new(
            vec![
                "perceptron-workbook".to_string(),
                "perceptron-learning".to_string(),
            ],
            false,
        );
        assert_eq!(
            flags.to_filter_string("warn"),
            "perceptron_learning=debug,perceptron_workbook=debug,warn"
        );
        assert_eq!(CrateDebugFlags::default().to_filter_string("info"), "info");
    }

    #[test]
    fn test_unknown_crates() {
        let flags = CrateDebugFlags::new(
            vec!["perceptron-charts".to_string(), "numpy".to_string()],
            false,
        );
        assert_eq!(flags.unknown_crates(), vec!["numpy"]);
        assert!(flags.any_enabled());
    }

    #[test]
    fn test_log_level() {
        let flags = CrateDebugFlags::new(vec!["perceptron-learning".to_string()], false);
        assert_eq!(flags.log_level("perceptron-learning"), tracing::Level::DEBUG);
        assert_eq!(flags.log_level("perceptron-charts"), tracing::Level::INFO);
    }
}
