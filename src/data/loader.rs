use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{AbundanceError, AbundanceResult};

use super::model::{AbundanceRow, AbundanceTable};
use super::{
    COL_ATOMIC_NUMBER, COL_ELEMENT, COL_LOG_ABUNDANCE, COL_LOG_ABUNDANCE_ERR, COMMENT_PREFIX,
};

/// Columns every abundance table must carry. Anything else is ignored.
const REQUIRED_COLUMNS: [&str; 4] = [
    COL_ATOMIC_NUMBER,
    COL_ELEMENT,
    COL_LOG_ABUNDANCE,
    COL_LOG_ABUNDANCE_ERR,
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read the digitised Table 1 of Asplund et al. (2009) from disk.
pub fn read_abundance_table(path: &Path) -> AbundanceResult<AbundanceTable> {
    let file = File::open(path).map_err(|source| AbundanceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_abundance_table(file)?;
    if table.is_empty() {
        log::warn!("{} contains no elements", path.display());
    }
    log::debug!("Loaded {} elements from {}", table.len(), path.display());
    Ok(table)
}

/// CSV layout: header row, `#`-prefixed comment lines, `-` for a
/// missing numeric cell. Required columns are `Z`, `element`,
/// `alpha_phot` and `alpha_phot_err`, in any order.
pub fn parse_abundance_table<R: Read>(reader: R) -> AbundanceResult<AbundanceTable> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(COMMENT_PREFIX))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(AbundanceError::malformed(format!(
            "missing required column '{missing}'"
        )));
    }

    let mut rows = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            if e.is_io_error() {
                AbundanceError::Csv(e)
            } else {
                AbundanceError::malformed(format!("data row {}: {e}", row_no + 1))
            }
        })?;
        let row: AbundanceRow = record
            .deserialize(Some(&headers))
            .map_err(|e| AbundanceError::malformed(format!("data row {}: {e}", row_no + 1)))?;

        if !seen.insert(row.element.clone()) {
            log::warn!(
                "Element '{}' appears more than once; ratio lookups for it will fail",
                row.element
            );
        }
        rows.push(row);
    }

    Ok(AbundanceTable::new(rows))
}
