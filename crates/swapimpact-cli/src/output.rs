//! Output formatting module

use swapimpact_app::TrainingReport;
use swapimpact_domain::SavingsEstimate;
use swapimpact_types::{OutputFormat, Result};

pub fn output_estimate(output_format: OutputFormat, estimate: &SavingsEstimate) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(estimate)?;
        println!("{}", content);
    } else {
        println!("\nEstimated Savings");
        println!("=================");
        println!("Method:       {}", estimate.method);
        println!("CO2 saved:    {:.3} kg", estimate.co2_saved_kg);
        println!("Water saved:  {:.3} L", estimate.water_saved_l);
        println!("Waste saved:  {:.3} kg", estimate.waste_saved_kg);
    }

    Ok(())
}

pub fn output_training_report(
    output_format: OutputFormat,
    report: &TrainingReport,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nTraining Report");
    println!("===============");
    println!("Trained at:    {}", report.trained_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Trees/target:  {}", report.tree_count);
    println!("Seed:          {}", report.seed);
    println!(
        "Samples:       {} train / {} test",
        report.train_samples, report.test_samples
    );
    println!();
    println!("{:<12} {:>10} {:>10} {:>8}", "Target", "MAE", "RMSE", "R2");
    println!("{}", "-".repeat(44));
    for (target, metrics) in &report.metrics {
        println!(
            "{:<12} {:>10.3} {:>10.3} {:>8.4}",
            target, metrics.mae, metrics.rmse, metrics.r2
        );
    }

    Ok(())
}
