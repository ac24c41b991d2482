use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asplund-abundances")]
#[command(
    version,
    about = "Convert Asplund et al. (2009) Table 1 abundances to number density ratios"
)]
pub struct Cli {
    /// Digitised Table 1 (CSV, `#` comments, `-` for missing values)
    #[arg(short, long, default_value = "asplund2009/asplund2009_table1.csv")]
    pub input: PathBuf,

    /// Where to write the ratios to hydrogen
    #[arg(short, long, default_value = "asplund2009_abundances.csv")]
    pub output: PathBuf,

    /// Numerator and denominator element, e.g. `Fe H`
    #[arg(value_name = "ELEMENT")]
    pub elements: Vec<String>,
}

impl Cli {
    /// `(numerator, denominator)` when exactly two elements were given.
    pub fn element_pair(&self) -> Option<(&str, &str)> {
        match self.elements.as_slice() {
            [top, bot] => Some((top.as_str(), bot.as_str())),
            _ => None,
        }
    }
}
