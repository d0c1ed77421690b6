//! Human-readable and JSON summaries of a pipeline run.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use percolation::PipelineOutput;
use percolation::iso::{DrawPlan, Panel};
use serde_json::json;

/// Prints a colored summary to stdout.
pub fn print_text(output: &PipelineOutput, plan: Option<&DrawPlan>) {
    let stats = &output.stats;

    println!();
    println!("{}", format!("Lattice {n}x{n}x{n}", n = stats.size).bold());
    println!("  Voxels:     {}", stats.total);
    println!(
        "  Solid:      {} ({:.1}%)",
        stats.solid,
        stats.solid_fraction() * 100.0
    );
    println!(
        "  Fluid:      {} ({:.1}% of open voxels)",
        stats.fluid,
        stats.fill_fraction() * 100.0
    );
    println!("  Empty:      {}", stats.empty);

    let verdict = if output.percolates() {
        "yes".green().bold().to_string()
    } else {
        "no".red().bold().to_string()
    };
    println!("  Percolates: {verdict}");

    println!();
    println!("{} ({})", "Visibility".bold(), output.cull.strategy);
    println!("  Combined:   {}", stats.visible_combined);
    println!("  Solid:      {}", stats.visible_solid);
    println!("  Fluid:      {}", stats.visible_fluid);

    if let Some(plan) = plan {
        println!();
        println!("{}", "Draw plan".bold());
        for panel in Panel::ALL {
            println!("  {:<11} {}", format!("{panel}:"), plan.count(panel));
        }
    }
    println!();
}

/// Prints the summary as a JSON document to stdout.
pub fn print_json(output: &PipelineOutput, plan: Option<&DrawPlan>) -> Result<()> {
    let mut document = json!({
        "stats": output.stats,
        "flow": output.flow,
        "cull": output.cull,
    });
    if let Some(plan) = plan {
        document["panels"] = json!({
            "combined": plan.count(Panel::Combined),
            "solid": plan.count(Panel::Solid),
            "fluid": plan.count(Panel::Fluid),
        });
    }

    let text = serde_json::to_string_pretty(&document).context("Failed to encode summary")?;
    println!("{text}");
    Ok(())
}
