//! Integration tests for qvis CLI argument parsing.
//!
//! main.rs is a binary, so the argument definitions are pulled in directly.

#[path = "../src/cli.rs"]
#[allow(dead_code)]
mod cli;

use clap::Parser;
use qvis_core::{
    AlgorithmKind, PhaseEstimationParameters, SearchParameters, compute_optimal_iteration_count,
    compute_phase_estimation_outcome,
};

use cli::{Cli, Commands, OutputFormat};

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn test_parse_search_with_target() {
    let cli = Cli::try_parse_from(["qvis", "search", "--qubits", "4", "--target", "0110"]).unwrap();
    match cli.command {
        Commands::Search {
            qubits,
            target,
            index,
            format,
        } => {
            assert_eq!(qubits, 4);
            assert_eq!(target.as_deref(), Some("0110"));
            assert_eq!(index, None);
            assert_eq!(format, OutputFormat::Table);
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn test_parse_search_with_index_json() {
    let cli =
        Cli::try_parse_from(["qvis", "search", "-q", "3", "-i", "5", "--format", "json"]).unwrap();
    match cli.command {
        Commands::Search {
            index, format, ..
        } => {
            assert_eq!(index, Some(5));
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn test_search_requires_a_target() {
    assert!(Cli::try_parse_from(["qvis", "search", "--qubits", "4"]).is_err());
}

#[test]
fn test_search_target_and_index_conflict() {
    let result = Cli::try_parse_from([
        "qvis", "search", "--qubits", "2", "--target", "10", "--index", "2",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_search_rejects_unknown_format() {
    let result = Cli::try_parse_from([
        "qvis", "search", "--qubits", "2", "--target", "10", "--format", "xml",
    ]);
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

#[test]
fn test_parse_phase_percent() {
    let cli = Cli::try_parse_from(["qvis", "phase", "--precision", "3", "--percent", "25"]).unwrap();
    match cli.command {
        Commands::Phase {
            precision,
            percent,
            fraction,
            ..
        } => {
            assert_eq!(precision, 3);
            assert_eq!(percent, Some(25));
            assert_eq!(fraction, None);

            // Same readout the command would print.
            let params = PhaseEstimationParameters::from_percent(precision, 25).unwrap();
            let outcome = compute_phase_estimation_outcome(&params).unwrap();
            assert_eq!(outcome.binary_encoding, "010");
        }
        _ => panic!("expected phase command"),
    }
}

#[test]
fn test_phase_percent_range_enforced() {
    assert!(Cli::try_parse_from(["qvis", "phase", "-p", "3", "--percent", "101"]).is_err());
    assert!(Cli::try_parse_from(["qvis", "phase", "-p", "3", "--percent", "100"]).is_ok());
}

#[test]
fn test_parse_phase_fraction() {
    let cli = Cli::try_parse_from(["qvis", "phase", "-p", "5", "--fraction", "0.375"]).unwrap();
    match cli.command {
        Commands::Phase { fraction, .. } => assert_eq!(fraction, Some(0.375)),
        _ => panic!("expected phase command"),
    }
}

#[test]
fn test_phase_requires_a_phase() {
    assert!(Cli::try_parse_from(["qvis", "phase", "--precision", "3"]).is_err());
}

// ---------------------------------------------------------------------------
// Fourier, resources, complexity, layout
// ---------------------------------------------------------------------------

#[test]
fn test_parse_fourier_default_input() {
    let cli = Cli::try_parse_from(["qvis", "fourier", "--qubits", "3"]).unwrap();
    match cli.command {
        Commands::Fourier { qubits, input, .. } => {
            assert_eq!(qubits, 3);
            assert_eq!(input, 0);
        }
        _ => panic!("expected fourier command"),
    }
}

#[test]
fn test_parse_resources_algorithm_aliases() {
    let cases = [
        ("search", AlgorithmKind::Search),
        ("grover", AlgorithmKind::Search),
        ("qft", AlgorithmKind::Fourier),
        ("phase", AlgorithmKind::PhaseEstimation),
        ("qpe", AlgorithmKind::PhaseEstimation),
    ];
    for (name, expected) in cases {
        let cli = Cli::try_parse_from(["qvis", "resources", "-a", name, "-q", "8"]).unwrap();
        match cli.command {
            Commands::Resources {
                algorithm,
                no_optimize,
                ..
            } => {
                assert_eq!(algorithm, expected, "alias {name}");
                assert!(!no_optimize);
            }
            _ => panic!("expected resources command"),
        }
    }
}

#[test]
fn test_resources_unknown_algorithm() {
    assert!(Cli::try_parse_from(["qvis", "resources", "-a", "shor", "-q", "8"]).is_err());
}

#[test]
fn test_parse_complexity_sizes() {
    let cli = Cli::try_parse_from(["qvis", "complexity", "--sizes", "16,1024"]).unwrap();
    match cli.command {
        Commands::Complexity { sizes } => assert_eq!(sizes, vec![16, 1024]),
        _ => panic!("expected complexity command"),
    }

    let cli = Cli::try_parse_from(["qvis", "complexity"]).unwrap();
    match cli.command {
        Commands::Complexity { sizes } => assert_eq!(sizes.len(), 6),
        _ => panic!("expected complexity command"),
    }
}

#[test]
fn test_parse_layout() {
    let cli = Cli::try_parse_from(["qvis", "layout", "--algorithm", "fourier", "--qubits", "40"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Layout {
            algorithm: AlgorithmKind::Fourier,
            qubits: 40
        }
    ));
}

// ---------------------------------------------------------------------------
// Global flags
// ---------------------------------------------------------------------------

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "qvis",
        "search",
        "-q",
        "2",
        "-t",
        "10",
        "-vv",
        "--config",
        "/tmp/qvis.yaml",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some("/tmp/qvis.yaml"));

    if let Commands::Search { qubits, target, .. } = cli.command {
        let params = SearchParameters::new(qubits, target.unwrap()).unwrap();
        assert_eq!(compute_optimal_iteration_count(&params).unwrap(), 2);
    } else {
        panic!("expected search command");
    }
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["qvis", "version"]).unwrap();
    assert!(matches!(cli.command, Commands::Version));
    assert_eq!(cli.verbose, 0);
}

#[test]
fn test_missing_subcommand_is_error() {
    assert!(Cli::try_parse_from(["qvis"]).is_err());
}
