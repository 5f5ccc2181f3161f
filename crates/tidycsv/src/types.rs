use serde::{Deserialize, Serialize};

use crate::config::MissingStrategy;

/// Classification of a column, fixed once when the column is profiled.
///
/// Imputation dispatches on this tag rather than re-inspecting value kinds
/// at fill time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnClass {
    /// Integer or floating point values; missing cells take the column mean.
    Numeric,
    /// String values; missing cells take the column mode.
    Categorical,
    /// Anything else (boolean, temporal, entirely untyped); left unchanged.
    Other,
}

/// Per-column summary derived for the overview and missing-value reports.
///
/// Recomputed fresh for each report; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    /// The loader's inferred dtype, Debug-rendered (e.g. `Int64`, `String`).
    pub dtype: String,
    pub class: ColumnClass,
    pub non_null_count: usize,
    pub null_count: usize,
}

/// End-of-run totals printed after export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningSummary {
    pub rows_before: usize,
    pub rows_after: usize,
    pub duplicates_removed: usize,
    /// Rows removed by the Drop strategy.
    pub rows_dropped: usize,
    /// Cells filled by the Replace strategy.
    pub cells_imputed: usize,
    /// Strategy that was applied; `None` when the choice was unrecognized.
    pub strategy: Option<MissingStrategy>,
}
