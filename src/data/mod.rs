/// Data layer: row types, loading, transformation, persistence and ratios.
///
/// Architecture:
/// ```text
///  asplund2009_table1.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → AbundanceTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform  │  log abundance → N_X / N_H (+ error)
///   └───────────┘
///        │
///        ├──────────────► writer   → asplund2009_abundances.csv
///        ▼
///   ┌──────────┐
///   │  ratio    │  optional: element / element (+ error)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod ratio;
pub mod transform;
pub mod writer;

/// Placeholder for an unmeasured value, on input and output alike.
pub const MISSING_TOKEN: &str = "-";

/// Lines starting with this byte are skipped by the loader.
pub const COMMENT_PREFIX: u8 = b'#';

/// Zero point of the logarithmic abundance scale (hydrogen).
pub const LOG_HYDROGEN: f64 = 12.0;

pub const COL_ATOMIC_NUMBER: &str = "Z";
pub const COL_ELEMENT: &str = "element";
pub const COL_LOG_ABUNDANCE: &str = "alpha_phot";
pub const COL_LOG_ABUNDANCE_ERR: &str = "alpha_phot_err";
pub const COL_RATIO: &str = "x_to_H";
pub const COL_RATIO_ERR: &str = "x_to_H_err";
