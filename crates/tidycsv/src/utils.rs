//! Shared helpers for dtype classification and null filling.

use polars::prelude::*;

use crate::types::ColumnClass;

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Classify a column's dtype into the imputation dispatch tag.
pub fn column_class(dtype: &DataType) -> ColumnClass {
    if is_numeric_dtype(dtype) {
        ColumnClass::Numeric
    } else if matches!(dtype, DataType::String | DataType::Categorical(_, _)) {
        ColumnClass::Categorical
    } else {
        ColumnClass::Other
    }
}

/// Calculate the mode (most frequent value) of a string Series.
///
/// Ties break toward the value seen first; an entirely-null Series has no
/// mode.
pub fn string_mode(series: &Series) -> Option<String> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return None;
    }

    let str_series = non_null.cast(&DataType::String).ok()?;
    let str_chunked = str_series.str().ok()?;

    // counts kept in first-seen order so the tie-break is deterministic
    let mut counts: Vec<(String, usize)> = Vec::new();
    for val in str_chunked.into_iter().flatten() {
        match counts.iter_mut().find(|(seen, _)| seen == val) {
            Some((_, n)) => *n += 1,
            None => counts.push((val.to_string(), 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (value, count) in counts {
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// Fill null values in a numeric Series with a specific value.
///
/// The result is materialized as Float64, matching what mean imputation
/// produces for nullable integer columns.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> PolarsResult<Series> {
    let mut values = Vec::with_capacity(series.len());
    for av in series.iter() {
        match av {
            AnyValue::Null => values.push(Some(fill_value)),
            av => values.push(Some(av.try_extract::<f64>()?)),
        }
    }
    Ok(Series::new(series.name().clone(), values))
}

/// Fill null values in a string Series with a specific value.
pub fn fill_string_nulls(series: &Series, fill_value: &str) -> PolarsResult<Series> {
    let str_series = series.cast(&DataType::String)?;
    let str_chunked = str_series.str()?;
    let values: Vec<String> = str_chunked
        .into_iter()
        .map(|v| v.map_or_else(|| fill_value.to_string(), |s| s.to_string()))
        .collect();
    Ok(Series::new(series.name().clone(), values))
}
