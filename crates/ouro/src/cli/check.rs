//! `ouro check` command implementation.

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;

/// Run the check command.
pub fn run(table: &Path, fail_on_cycle: bool) -> Result<ExitCode, ouro::Error> {
    let table = super::load_table(table)?;

    let report = ouro::analyze(&table);

    if report.is_empty() {
        println!("{}", "No inheritance cycles detected.".green());
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "Found {} classes in inheritance cycles:",
        report.len().to_string().red().bold()
    );
    println!();

    for (class, path) in report.iter() {
        println!("  {} {class}:", "Cycle at".yellow().bold());
        println!("    {}", path.to_string().dimmed());
    }

    if fail_on_cycle {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
