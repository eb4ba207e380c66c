//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swapimpact_types::OutputFormat;

#[derive(Parser)]
#[command(name = "swapimpact")]
#[command(version)]
#[command(about = "Environmental savings estimation for clothing swaps")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Trained estimator artifact path. Uses config value if not specified.
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate savings for a single item
    Estimate {
        /// Garment type (e.g. "T-shirt", "Jeans", "Saree")
        item_type: String,

        /// Material (e.g. "Cotton", "Recycled_Polyester")
        material: String,

        /// Brand (e.g. "H&M", "Fabindia"; unknown brands fall back)
        brand: String,

        /// Condition (e.g. "New", "Good", "Poor")
        condition: String,
    },

    /// Train the estimator and save the artifact
    Train {
        /// Number of bagged trees per target. Uses config value if not specified.
        #[arg(long)]
        trees: Option<usize>,

        /// Seed for splitting and bootstrap resampling. Uses config value if not specified.
        #[arg(long)]
        seed: Option<u64>,

        /// Holdout fraction for the metrics report. Uses config value if not specified.
        #[arg(long)]
        test_fraction: Option<f64>,

        /// Number of worker threads. 0 = auto (CPU count).
        #[arg(long, short = 'j')]
        jobs: Option<usize>,

        /// Artifact output path override
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Inspect the synthetic LCA dataset
    Dataset {
        /// Export the records as CSV instead of printing a summary
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show the LCA data-source citations
    Sources,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format (json, table)
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set training seed
        #[arg(long)]
        set_seed: Option<u64>,

        /// Set trees per target
        #[arg(long)]
        set_trees: Option<usize>,

        /// Set holdout fraction
        #[arg(long)]
        set_test_fraction: Option<f64>,

        /// Set worker thread count (0 = auto)
        #[arg(long)]
        set_jobs: Option<usize>,

        /// Set artifact path
        #[arg(long)]
        set_model_path: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
