// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # perceptron-observability
//!
//! Logging setup shared by the two generator binaries, with per-crate debug
//! flag support.
//!
//! ## Features
//! - `file-logging`: additionally write logs into a timestamped run folder

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

// Re-export commonly used items
pub use cli::*;
pub use init::*;

/// Crate names that accept debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "perceptron-learning",
    "perceptron-config",
    "perceptron-workbook",
    "perceptron-charts",
];
