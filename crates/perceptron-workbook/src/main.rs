// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use perceptron_config::{load_config, validate_config};
use perceptron_learning::WeightVector;
#[cfg(not(feature = "file-logging"))]
use perceptron_observability::init_logging;
use perceptron_observability::{debug_flags_help, CrateDebugFlags};
use perceptron_workbook::generate_workbook;

/// Perceptron Workbook - spreadsheet that shows a perceptron learning the AND gate
#[derive(Parser, Debug)]
#[command(name = "perceptron-workbook", version, author, long_about = None, after_help = debug_flags_help())]
struct Args {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial weights as "w0,w1,w2" (default: 3,3,3)
    #[arg(short, long)]
    weights: Option<String>,

    /// Directory receiving the workbook (default: results)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable debug logging for one crate (repeatable)
    #[arg(long = "debug", value_name = "CRATE")]
    debug: Vec<String>,

    /// Enable debug logging for all crates
    #[arg(long, default_value_t = false)]
    debug_all: bool,
}

impl Args {
    fn overrides(&self) -> HashMap<String, String> {
        let mut cli = HashMap::new();
        if let Some(weights) = &self.weights {
            cli.insert("initial_weights".to_string(), weights.clone());
        }
        if let Some(dir) = &self.output_dir {
            cli.insert("results_dir".to_string(), dir.display().to_string());
        }
        cli
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref(), Some(&args.overrides()))
        .context("Failed to load configuration")?;
    validate_config(&config).context("Invalid configuration")?;

    let flags = CrateDebugFlags::new(args.debug.iter().cloned(), args.debug_all);
    #[cfg(feature = "file-logging")]
    let _guard = perceptron_observability::init_logging_with_file(&config.logging.level, &flags, None)?;
    #[cfg(not(feature = "file-logging"))]
    let _guard = init_logging(&config.logging.level, &flags)?;
    for unknown in flags.unknown_crates() {
        warn!("Unknown crate in --debug: {}", unknown);
    }

    let initial = WeightVector::from(config.training.initial_weights);
    if config.training.iterations != perceptron_workbook::GRID_ITERATIONS {
        warn!(
            "Workbook grid always has {} rows; ignoring iterations = {}",
            perceptron_workbook::GRID_ITERATIONS,
            config.training.iterations
        );
    }
    info!("Generating workbook with initial weights {}", initial);

    let path = config.output.workbook_path();
    generate_workbook(initial, &path)
        .with_context(|| format!("Failed to create workbook {}", path.display()))?;

    println!("Excel file created: {}", path.display());
    Ok(())
}
