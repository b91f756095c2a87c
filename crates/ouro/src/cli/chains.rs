//! `ouro chains` command implementation.

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use ouro::{build_chains, AncestorChain, ClassName};

/// Run the chains command.
pub fn run(table: &Path, class: Option<&str>) -> Result<ExitCode, ouro::Error> {
    let table = super::load_table(table)?;

    let chains = build_chains(&table);

    if let Some(name) = class {
        let name = ClassName::from(name);
        let chain = chains
            .get(&name)
            .ok_or_else(|| ouro::Error::UnknownClass(name.to_string()))?;
        print_chain(chain);
        return Ok(ExitCode::SUCCESS);
    }

    // Sort for stable output; the chain map has no meaningful order
    let mut sorted: Vec<&AncestorChain> = chains.values().collect();
    sorted.sort_by(|a, b| a.start().cmp(b.start()));

    for chain in sorted {
        print_chain(chain);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_chain(chain: &AncestorChain) {
    let rendered = chain
        .classes()
        .iter()
        .map(ClassName::as_str)
        .collect::<Vec<_>>()
        .join(" -> ");

    if chain.closes_cycle() {
        println!("{rendered}  {}", "[cycle]".red().bold());
    } else {
        println!("{rendered}");
    }
}
