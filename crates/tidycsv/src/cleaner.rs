//! Row-level cleaning: duplicate removal and whole-row null dropping.

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;

/// Dataset cleaning operations that remove rows.
pub struct DataCleaner;

impl DataCleaner {
    /// Count rows that are exact repeats of an earlier row.
    ///
    /// Two rows are duplicates when every column value matches exactly;
    /// missing cells compare equal to each other.
    pub fn count_duplicates(df: &DataFrame) -> Result<usize> {
        let distinct = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
        Ok(df.height() - distinct.height())
    }

    /// Retain only the first occurrence of each distinct row, preserving the
    /// relative order of retained rows. Returns the deduplicated frame and
    /// the number of rows removed.
    pub fn remove_duplicates(df: DataFrame) -> Result<(DataFrame, usize)> {
        let before = df.height();
        let df = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
        let removed = before - df.height();

        if removed > 0 {
            debug!("removed {} duplicate rows", removed);
        }
        Ok((df, removed))
    }

    /// Remove every row containing at least one missing cell, preserving the
    /// order of remaining rows. Returns the filtered frame and the number of
    /// rows removed.
    pub fn drop_missing_rows(df: DataFrame) -> Result<(DataFrame, usize)> {
        let before = df.height();
        if df.width() == 0 || before == 0 {
            return Ok((df, 0));
        }

        // Accumulate null counts per row, then keep rows whose count is zero.
        let mut null_counts = Series::new("nulls".into(), vec![0u32; df.height()]);
        for col in df.get_columns() {
            let series = col.as_materialized_series();
            let null_int = series.is_null().cast(&DataType::UInt32)?;
            null_counts = (&null_counts + &null_int)?;
        }

        let null_counts = null_counts.cast(&DataType::Float64)?;
        let mask = null_counts.lt_eq(0.0)?;
        let df = df.filter(&mask)?;

        let removed = before - df.height();
        if removed > 0 {
            debug!("dropped {} rows with missing values", removed);
        }
        Ok((df, removed))
    }
}
