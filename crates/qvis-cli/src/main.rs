//! qvis Command-Line Interface
//!
//! Renders Grover search, phase estimation and Quantum Fourier Transform
//! outcomes as terminal tables or JSON records.
//!
//! ```text
//!   |0⟩ ─H─┤ Oracle ├─┤ Diffusion ├─M─
//!   |0⟩ ─H─┤        ├─┤           ├─M─
//!
//!                  Q V I S
//!      Quantum algorithm outcome calculators
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use qvis_core::Settings;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{complexity, fourier, layout, phase, resources, search, version};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref().map(Path::new))
        .context("Failed to load settings")?;

    init_logging(cli.verbose, &settings);

    match cli.command {
        Commands::Search {
            qubits,
            target,
            index,
            format,
        } => search::execute(&settings, qubits, target.as_deref(), index, format),

        Commands::Phase {
            precision,
            percent,
            fraction,
            format,
        } => phase::execute(precision, percent, fraction, format),

        Commands::Fourier {
            qubits,
            input,
            format,
        } => fourier::execute(&settings, qubits, input, format),

        Commands::Resources {
            algorithm,
            qubits,
            no_optimize,
        } => resources::execute(&settings, algorithm, qubits, no_optimize),

        Commands::Complexity { sizes } => complexity::execute(&sizes),

        Commands::Layout { algorithm, qubits } => layout::execute(algorithm, qubits),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

/// Install the global subscriber. `-v` flags override the configured level.
fn init_logging(verbose: u8, settings: &Settings) {
    let level = match verbose {
        0 => settings.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::new(level);

    // Logs go to stderr so JSON results on stdout stay parseable.
    if settings.logging.format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
