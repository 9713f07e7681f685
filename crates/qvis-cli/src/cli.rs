//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use qvis_core::AlgorithmKind;

/// qvis - outcome calculators for quantum algorithm visualizations
#[derive(Parser, Debug)]
#[command(name = "qvis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to ~/.qvis/config.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for calculator results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table with bars
    #[default]
    Table,
    /// Pretty-printed JSON records
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grover search: outcome distribution and optimal iteration count
    Search {
        /// Number of qubits in the search register
        #[arg(short, long)]
        qubits: u32,

        /// Marked state as a bit-string, most significant bit first
        #[arg(short, long, conflicts_with = "index", required_unless_present = "index")]
        target: Option<String>,

        /// Marked state as a basis-state index
        #[arg(short, long)]
        index: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Phase estimation: best binary-fraction readout of a phase
    Phase {
        /// Number of precision qubits
        #[arg(short, long)]
        precision: u32,

        /// Phase in whole percent (0-100)
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(0..=100),
            conflicts_with = "fraction",
            required_unless_present = "fraction"
        )]
        percent: Option<u32>,

        /// Phase as a fraction in [0, 1]
        #[arg(long)]
        fraction: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Quantum Fourier Transform: per-state phases of a transformed basis state
    Fourier {
        /// Number of qubits
        #[arg(short, long)]
        qubits: u32,

        /// Input basis-state index
        #[arg(short, long, default_value = "0")]
        input: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Estimate memory and compute time for an algorithm
    Resources {
        /// Algorithm (search, fourier, phase)
        #[arg(short, long)]
        algorithm: AlgorithmKind,

        /// Number of qubits (precision qubits for phase)
        #[arg(short, long)]
        qubits: u32,

        /// Report unoptimized compute time
        #[arg(long)]
        no_optimize: bool,
    },

    /// Classical versus quantum complexity reference
    Complexity {
        /// Problem sizes for the search scaling comparison
        #[arg(long, value_delimiter = ',', default_value = "4,16,64,256,1024,1048576")]
        sizes: Vec<u64>,
    },

    /// Wire and gate labels for a circuit diagram
    Layout {
        /// Algorithm (search, fourier, phase)
        #[arg(short, long)]
        algorithm: AlgorithmKind,

        /// Number of qubits (precision qubits for phase)
        #[arg(short, long)]
        qubits: u32,
    },

    /// Show version information
    Version,
}
