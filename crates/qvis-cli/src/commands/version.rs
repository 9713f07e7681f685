//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum algorithm outcome calculators",
        style("qvis").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qvis-core  Search, phase estimation and Fourier calculators");
    println!("  qvis-cli   Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
