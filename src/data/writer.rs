use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{AbundanceError, AbundanceResult};

use super::model::TransformedRow;
use super::{COL_ATOMIC_NUMBER, COL_ELEMENT, COL_RATIO, COL_RATIO_ERR};

/// Save the transformed table, replacing any existing file.
pub fn write_transformed_table(path: &Path, rows: &[TransformedRow]) -> AbundanceResult<()> {
    let file = File::create(path).map_err(|source| AbundanceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_transformed(file, rows)?;
    log::info!("Wrote {} elements to {}", rows.len(), path.display());
    Ok(())
}

/// Columns `Z,element,x_to_H,x_to_H_err`; missing values become `-`.
pub fn write_transformed<W: Write>(writer: W, rows: &[TransformedRow]) -> AbundanceResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    // serde only emits the header alongside the first record
    if rows.is_empty() {
        wtr.write_record([COL_ATOMIC_NUMBER, COL_ELEMENT, COL_RATIO, COL_RATIO_ERR])?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
