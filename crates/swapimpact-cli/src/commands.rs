//! Command handlers

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use swapimpact_app::repository::open_estimator_repo_at;
use swapimpact_app::{Config, ProgressCallback, SustainabilityEstimator, TrainOptions};
use swapimpact_domain::constants::{
    BRAND_FACTORS, CONDITION_FACTORS, DATA_SOURCES, GARMENT_SPECS, MATERIAL_PROFILES,
};
use swapimpact_domain::{build_lca_dataset, ItemAttributes};
use swapimpact_infra::export_dataset;
use swapimpact_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_estimate, output_training_report};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Estimate {
            item_type,
            material,
            brand,
            condition,
        } => cmd_estimate(
            &cli,
            &config,
            output_format,
            item_type,
            material,
            brand,
            condition,
        ),

        Commands::Train {
            trees,
            seed,
            test_fraction,
            jobs,
            output,
        } => cmd_train(
            &cli,
            &config,
            output_format,
            trees.unwrap_or(config.tree_count),
            seed.unwrap_or(config.seed),
            test_fraction.unwrap_or(config.test_fraction),
            jobs.unwrap_or(config.jobs),
            output.clone(),
        ),

        Commands::Dataset { output } => cmd_dataset(&cli, output_format, output.clone()),

        Commands::Sources => cmd_sources(output_format),

        Commands::Config {
            show,
            set_output,
            set_seed,
            set_trees,
            set_test_fraction,
            set_jobs,
            set_model_path,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            *set_seed,
            *set_trees,
            *set_test_fraction,
            *set_jobs,
            set_model_path.clone(),
            *reset,
        ),
    }
}

/// Resolve the artifact path from override > CLI flag > config
fn resolve_model_path(
    cli: &Cli,
    config: &Config,
    override_path: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    if let Some(ref path) = cli.model {
        return Ok(path.clone());
    }
    config.model_path()
}

fn cmd_estimate(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    item_type: &str,
    material: &str,
    brand: &str,
    condition: &str,
) -> Result<()> {
    let attributes = ItemAttributes::new(item_type, material, brand, condition)?;

    let model_path = resolve_model_path(cli, config, None)?;
    if cli.verbose {
        eprintln!("Loading estimator from: {}", model_path.display());
    }

    let repo = open_estimator_repo_at(model_path);
    let estimator = SustainabilityEstimator::from_artifact(repo.load()?);

    let estimate = estimator.estimate(&attributes)?;
    output_estimate(output_format, &estimate)
}

#[allow(clippy::too_many_arguments)]
fn cmd_train(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    trees: usize,
    seed: u64,
    test_fraction: f64,
    jobs: usize,
    output: Option<PathBuf>,
) -> Result<()> {
    let options = TrainOptions::new()
        .with_tree_count(trees)
        .with_seed(seed)
        .with_test_fraction(test_fraction)
        .with_jobs(jobs);

    if cli.verbose {
        eprintln!(
            "Training with {} trees/target, seed {}, test fraction {}",
            trees, seed, test_fraction
        );
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    let progress = pb.clone();
    let callback: ProgressCallback = Box::new(move |msg: &str| {
        progress.set_message(msg.to_string());
        progress.tick();
    });

    let mut estimator = SustainabilityEstimator::new();
    let report = estimator.train(&options, Some(&callback))?;
    pb.finish_and_clear();

    output_training_report(output_format, &report)?;

    let model_path = resolve_model_path(cli, config, output)?;
    let repo = open_estimator_repo_at(model_path);
    if let Some(artifact) = estimator.artifact() {
        repo.save(artifact)?;
        println!("\nEstimator saved to: {}", repo.artifact_path().display());
    }

    Ok(())
}

fn cmd_dataset(cli: &Cli, output_format: OutputFormat, output: Option<PathBuf>) -> Result<()> {
    let dataset = build_lca_dataset();

    if let Some(output_path) = output {
        export_dataset(&dataset, &output_path)?;
        println!(
            "Exported {} records to: {}",
            dataset.len(),
            output_path.display()
        );
        return Ok(());
    }

    if cli.verbose {
        eprintln!("Built {} synthetic records", dataset.len());
    }

    if output_format == OutputFormat::Json {
        let summary = serde_json::json!({
            "records": dataset.len(),
            "item_types": GARMENT_SPECS.len(),
            "materials": MATERIAL_PROFILES.len(),
            "brands": BRAND_FACTORS.len(),
            "conditions": CONDITION_FACTORS.len(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let co2_min = dataset.iter().map(|r| r.co2_kg).fold(f64::INFINITY, f64::min);
    let co2_max = dataset.iter().map(|r| r.co2_kg).fold(f64::NEG_INFINITY, f64::max);
    let water_max = dataset.iter().map(|r| r.water_l).fold(f64::NEG_INFINITY, f64::max);

    println!("\nSynthetic LCA Dataset");
    println!("=====================");
    println!("Records:     {}", dataset.len());
    println!(
        "Tables:      {} item types x {} materials x {} brands x {} conditions",
        GARMENT_SPECS.len(),
        MATERIAL_PROFILES.len(),
        BRAND_FACTORS.len(),
        CONDITION_FACTORS.len()
    );
    println!("CO2 range:   {:.3} - {:.3} kg", co2_min, co2_max);
    println!("Water max:   {:.0} L", water_max);

    Ok(())
}

fn cmd_sources(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        let sources: Vec<_> = DATA_SOURCES
            .iter()
            .map(|s| {
                serde_json::json!({
                    "key": s.key,
                    "name": s.name,
                    "year": s.year,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&sources)?);
        return Ok(());
    }

    println!("\nLCA Data Sources");
    println!("================");
    for source in DATA_SOURCES {
        println!("{:<20} {} ({})", source.key, source.name, source.year);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_seed: Option<u64>,
    set_trees: Option<usize>,
    set_test_fraction: Option<f64>,
    set_jobs: Option<usize>,
    set_model_path: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(seed) = set_seed {
        config.seed = seed;
        modified = true;
    }

    if let Some(trees) = set_trees {
        config.tree_count = trees;
        modified = true;
    }

    if let Some(test_fraction) = set_test_fraction {
        config.test_fraction = test_fraction;
        modified = true;
    }

    if let Some(jobs) = set_jobs {
        config.jobs = jobs;
        modified = true;
    }

    if let Some(model_path) = set_model_path {
        config.model_path = Some(model_path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
