//! Per-column profiling for the overview and missing-value reports.

use polars::prelude::*;

use crate::error::Result;
use crate::types::ColumnSummary;
use crate::utils::column_class;

/// Derives transient per-column summaries from the current dataset.
pub struct DataProfiler;

impl DataProfiler {
    /// Summarize every column: name, inferred dtype, class, and null counts.
    ///
    /// Pure; the dataset is not modified. Each report recomputes this fresh
    /// so the counts always reflect the current state.
    pub fn summarize(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
        let mut summaries = Vec::with_capacity(df.width());

        for col_name in df.get_column_names() {
            let col = df.column(col_name)?;
            let series = col.as_materialized_series();
            let null_count = series.null_count();

            summaries.push(ColumnSummary {
                name: col_name.to_string(),
                dtype: format!("{:?}", series.dtype()),
                class: column_class(series.dtype()),
                non_null_count: series.len() - null_count,
                null_count,
            });
        }

        Ok(summaries)
    }

    /// Total missing cells across all columns.
    pub fn missing_cells(df: &DataFrame) -> usize {
        df.get_columns().iter().map(|col| col.null_count()).sum()
    }
}
