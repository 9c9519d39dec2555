// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use perceptron_charts::{register_fonts, render_all, RenderSettings};
use perceptron_config::{load_config, validate_config};
use perceptron_learning::{train, WeightVector};
#[cfg(not(feature = "file-logging"))]
use perceptron_observability::init_logging;
use perceptron_observability::{debug_flags_help, CrateDebugFlags};

/// Perceptron Charts - PNG figures that show a perceptron learning the AND gate
#[derive(Parser, Debug)]
#[command(name = "perceptron-charts", version, author, long_about = None, after_help = debug_flags_help())]
struct Args {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial weights as "w0,w1,w2" (default: 3,3,3)
    #[arg(short, long)]
    weights: Option<String>,

    /// Number of training iterations (default: 20)
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Results directory; charts go into its graphs/ subdirectory (default: results)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Raster resolution in dots per inch (default: 150)
    #[arg(long)]
    dpi: Option<u32>,

    /// TrueType font file used for all chart text
    #[arg(long)]
    font: Option<PathBuf>,

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
        if let Some(iterations) = self.iterations {
            cli.insert("iterations".to_string(), iterations.to_string());
        }
        if let Some(dir) = &self.output_dir {
            cli.insert("results_dir".to_string(), dir.display().to_string());
        }
        if let Some(dpi) = self.dpi {
            cli.insert("dpi".to_string(), dpi.to_string());
        }
        if let Some(font) = &self.font {
            cli.insert("font_path".to_string(), font.display().to_string());
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

    println!("Generating Perceptron visualizations...\n");

    let font = register_fonts(config.charts.font_path.as_deref())
        .context("Chart text needs a TrueType font (set --font or charts.font_path)")?;
    info!("Using font {}", font.display());

    let initial = WeightVector::from(config.training.initial_weights);
    let history = train(initial, config.training.iterations);

    let graphs_dir = config.output.graphs_path();
    let settings = RenderSettings::new(config.charts.dpi);
    let written = render_all(&history, &graphs_dir, &settings)
        .with_context(|| format!("Failed to render charts into {}", graphs_dir.display()))?;

    for path in &written {
        println!("Created: {}", path.display());
    }
    println!("\nAll visualizations saved to: {}", graphs_dir.display());
    Ok(())
}
