//! Statistical imputation methods.

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::types::{ColumnClass, ColumnSummary};
use crate::utils::{fill_numeric_nulls, fill_string_nulls, string_mode};

/// Statistical imputation for filling missing values.
pub struct StatisticalImputer;

impl StatisticalImputer {
    /// Fill missing cells in every column according to its profiled class.
    ///
    /// Numeric columns take the column mean, categorical columns take the
    /// mode (ties toward the first-seen value), other columns are left
    /// unchanged. A column whose values are entirely missing has no mean or
    /// mode and is skipped. Returns the number of cells filled; each fill
    /// appends one human-readable entry to `processing_steps`.
    pub fn impute_missing(
        df: &mut DataFrame,
        summaries: &[ColumnSummary],
        processing_steps: &mut Vec<String>,
    ) -> Result<usize> {
        let mut filled = 0;

        for summary in summaries {
            if summary.null_count == 0 {
                continue;
            }
            match summary.class {
                ColumnClass::Numeric => {
                    filled += Self::apply_numeric_mean(df, &summary.name, processing_steps)?;
                }
                ColumnClass::Categorical => {
                    filled += Self::apply_mode_imputation(df, &summary.name, processing_steps)?;
                }
                ColumnClass::Other => {
                    debug!(
                        "column '{}' is neither numeric nor categorical, leaving {} missing cells",
                        summary.name, summary.null_count
                    );
                }
            }
        }

        Ok(filled)
    }

    /// Apply mean imputation to a numeric column.
    ///
    /// Returns the number of cells filled (zero when the column has no
    /// nulls, or no values to compute a mean from).
    pub fn apply_numeric_mean(
        df: &mut DataFrame,
        col_name: &str,
        processing_steps: &mut Vec<String>,
    ) -> Result<usize> {
        let series = df.column(col_name)?.as_materialized_series().clone();
        let null_count = series.null_count();
        if null_count == 0 {
            return Ok(0);
        }

        let Some(mean_val) = series.mean() else {
            // entirely-missing column: nothing to compute a mean from
            return Ok(0);
        };

        let filled = fill_numeric_nulls(&series, mean_val)?;
        df.replace(col_name, filled)?;

        processing_steps.push(format!("Filled '{}' with mean: {:.2}", col_name, mean_val));
        Ok(null_count)
    }

    /// Apply mode imputation to a categorical column.
    pub fn apply_mode_imputation(
        df: &mut DataFrame,
        col_name: &str,
        processing_steps: &mut Vec<String>,
    ) -> Result<usize> {
        let series = df.column(col_name)?.as_materialized_series().clone();
        let null_count = series.null_count();
        if null_count == 0 {
            return Ok(0);
        }

        let Some(mode_val) = string_mode(&series) else {
            return Ok(0);
        };

        let filled = fill_string_nulls(&series, &mode_val)?;
        df.replace(col_name, filled)?;

        processing_steps.push(format!("Filled '{}' with mode: '{}'", col_name, mode_val));
        Ok(null_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiler::DataProfiler;

    #[test]
    fn test_apply_numeric_mean_basic() {
        let mut df = df![
            "values" => [Some(1.0), None, Some(5.0)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let filled = StatisticalImputer::apply_numeric_mean(&mut df, "values", &mut steps).unwrap();

        // Mean of [1, 5] = 3
        let values = df.column("values").unwrap();
        assert_eq!(filled, 1);
        assert_eq!(values.null_count(), 0);
        assert_eq!(values.get(1).unwrap().try_extract::<f64>().unwrap(), 3.0);
        assert!(steps[0].contains("mean"));
    }

    #[test]
    fn test_apply_numeric_mean_preserves_original_values() {
        let mut df = df![
            "values" => [Some(10.0), None, Some(20.0)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        StatisticalImputer::apply_numeric_mean(&mut df, "values", &mut steps).unwrap();

        let values = df.column("values").unwrap();
        assert_eq!(values.get(0).unwrap().try_extract::<f64>().unwrap(), 10.0);
        assert_eq!(values.get(2).unwrap().try_extract::<f64>().unwrap(), 20.0);
        assert_eq!(values.get(1).unwrap().try_extract::<f64>().unwrap(), 15.0);
    }

    #[test]
    fn test_apply_numeric_mean_all_nulls_is_noop() {
        let mut df = df![
            "values" => [Option::<f64>::None, None, None],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let filled = StatisticalImputer::apply_numeric_mean(&mut df, "values", &mut steps).unwrap();

        assert_eq!(filled, 0);
        assert!(steps.is_empty());
        assert_eq!(df.column("values").unwrap().null_count(), 3);
    }

    #[test]
    fn test_apply_numeric_mean_no_nulls() {
        let mut df = df![
            "values" => [1.0, 2.0, 3.0],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let filled = StatisticalImputer::apply_numeric_mean(&mut df, "values", &mut steps).unwrap();

        assert_eq!(filled, 0);
        assert!(steps.is_empty());
    }

    #[test]
    fn test_apply_mode_imputation_basic() {
        let mut df = df![
            "category" => [Some("A"), Some("B"), Some("A"), None, Some("A")],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let filled =
            StatisticalImputer::apply_mode_imputation(&mut df, "category", &mut steps).unwrap();

        let category = df.column("category").unwrap();
        assert_eq!(filled, 1);
        assert_eq!(category.null_count(), 0);
        // Mode is "A" (appears 3 times)
        assert_eq!(category.get(3).unwrap().to_string(), "\"A\"");
        assert!(steps[0].contains("mode"));
    }

    #[test]
    fn test_apply_mode_imputation_tie_breaks_first_seen() {
        let mut df = df![
            "category" => [Some("B"), Some("A"), None],
        ]
        .unwrap();
        let mut steps = Vec::new();

        StatisticalImputer::apply_mode_imputation(&mut df, "category", &mut steps).unwrap();

        let category = df.column("category").unwrap();
        assert_eq!(category.null_count(), 0);
        assert_eq!(category.get(2).unwrap().to_string(), "\"B\"");
    }

    #[test]
    fn test_impute_missing_dispatches_by_class() {
        let mut df = df![
            "age" => [Some(20i64), Some(40), None],
            "city" => [Some("Oslo"), None, Some("Oslo")],
            "flag" => [Some(true), None, Some(false)],
        ]
        .unwrap();
        let summaries = DataProfiler::summarize(&df).unwrap();
        let mut steps = Vec::new();

        let filled = StatisticalImputer::impute_missing(&mut df, &summaries, &mut steps).unwrap();

        // numeric and categorical filled, boolean left alone
        assert_eq!(filled, 2);
        assert_eq!(df.column("age").unwrap().null_count(), 0);
        assert_eq!(df.column("city").unwrap().null_count(), 0);
        assert_eq!(df.column("flag").unwrap().null_count(), 1);

        let age = df.column("age").unwrap().get(2).unwrap();
        assert_eq!(age.try_extract::<f64>().unwrap(), 30.0);
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn test_impute_missing_nothing_to_do() {
        let mut df = df![
            "a" => [1i64, 2],
            "b" => ["x", "y"],
        ]
        .unwrap();
        let summaries = DataProfiler::summarize(&df).unwrap();
        let mut steps = Vec::new();

        let filled = StatisticalImputer::impute_missing(&mut df, &summaries, &mut steps).unwrap();
        assert_eq!(filled, 0);
        assert!(steps.is_empty());
    }
}
