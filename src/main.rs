mod cli;
mod data;
mod error;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use data::loader::read_abundance_table;
use data::model::ElementRatioResult;
use data::ratio::report_element_ratio;
use data::transform::transform_abundances;
use data::writer::write_transformed_table;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}

/// Load → transform → save, then the optional element ratio.
fn run(cli: &Cli) -> Result<Option<ElementRatioResult>> {
    let table = read_abundance_table(&cli.input)
        .with_context(|| format!("loading abundance table {}", cli.input.display()))?;
    let abundances = transform_abundances(&table);

    write_transformed_table(&cli.output, &abundances)
        .with_context(|| format!("saving abundances to {}", cli.output.display()))?;

    let Some((top, bot)) = cli.element_pair() else {
        if !cli.elements.is_empty() {
            log::warn!(
                "Expected two elements for a ratio, got {}; skipping",
                cli.elements.len()
            );
        }
        return Ok(None);
    };

    let result = report_element_ratio(&abundances, top, bot)
        .with_context(|| format!("calculating {top}/{bot}"))?;
    Ok(Some(result))
}
