//! CSV export of the cleaned dataset.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::info;

use crate::error::Result;

/// Writes the final dataset to disk.
pub struct DatasetExporter;

impl DatasetExporter {
    /// Write `df` as CSV to `path`, overwriting any existing file.
    ///
    /// Header row included, comma separator, standard double-quote quoting,
    /// no row-index column.
    pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .with_quote_char(b'"')
            .finish(df)?;

        info!("dataset saved: {}", path.display());
        Ok(())
    }
}
