//! Phase command implementation.
//!
//! Show the best binary-fraction readout a phase-estimation register of a
//! given precision can produce.

use anyhow::Result;
use console::style;
use tracing::info;

use qvis_core::{
    PhaseEstimationOutcome, PhaseEstimationParameters, compute_phase_estimation_outcome,
};

use super::common::{print_json, print_probability_row};
use crate::cli::OutputFormat;

/// Execute the phase command.
pub fn execute(
    precision: u32,
    percent: Option<u32>,
    fraction: Option<f64>,
    format: OutputFormat,
) -> Result<()> {
    let params = match (percent, fraction) {
        (Some(percent), _) => PhaseEstimationParameters::from_percent(precision, percent)?,
        (None, Some(fraction)) => PhaseEstimationParameters::new(precision, fraction)?,
        (None, None) => anyhow::bail!("Either --percent or --fraction is required"),
    };

    let outcome = compute_phase_estimation_outcome(&params)?;

    info!(
        precision,
        encoding = %outcome.binary_encoding,
        confidence = outcome.display_confidence_percent,
        "phase estimate ready"
    );

    match format {
        OutputFormat::Json => print_json(&outcome),
        OutputFormat::Table => {
            print_table(&outcome);
            Ok(())
        }
    }
}

fn print_table(outcome: &PhaseEstimationOutcome) {
    println!(
        "\n{} Phase estimation with {} precision qubits",
        style("✓").green().bold(),
        outcome.precision_bits
    );
    println!("  True phase:     {}", outcome.true_phase_fraction);
    println!(
        "  Measured:       |{}⟩",
        style(&outcome.binary_encoding).cyan().bold()
    );
    println!("  Estimate:       {}", style(outcome.fraction_label()).yellow());
    println!("  Absolute error: {:.6}", outcome.absolute_error);
    println!("  Resolution:     {}", outcome.resolution());
    if outcome.clamped {
        println!(
            "  {} phase rounded up to 1 and was clamped to the largest register value",
            style("!").yellow().bold()
        );
    }

    println!();
    let confidence = f64::from(outcome.display_confidence_percent) / 100.0;
    print_probability_row(&outcome.estimate_label(), confidence, true);
    print_probability_row("others", f64::from(outcome.others_percent()) / 100.0, false);
}
