//! Plain-text table rendering for the console reports.
//!
//! Width-aligned columns, no external table dependency. The preview
//! renderer returns a `Result` so a rendering failure can be reported as a
//! warning instead of aborting the run.

use polars::prelude::*;

use crate::error::Result;
use crate::types::ColumnSummary;

/// Cells longer than this are truncated with an ellipsis.
const MAX_CELL_WIDTH: usize = 24;

/// Render the dataset-overview table: column, inferred dtype, non-null count.
pub fn overview_table(summaries: &[ColumnSummary]) -> String {
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                truncate_str(&s.name, MAX_CELL_WIDTH),
                s.dtype.clone(),
                s.non_null_count.to_string(),
            ]
        })
        .collect();
    render_aligned(&["Column", "Data Type", "Non-Null Count"], &rows)
}

/// Render the missing-values table: column, missing count.
pub fn missing_table(summaries: &[ColumnSummary]) -> String {
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                truncate_str(&s.name, MAX_CELL_WIDTH),
                s.null_count.to_string(),
            ]
        })
        .collect();
    render_aligned(&["Column", "Missing Count"], &rows)
}

/// Render the first `rows` rows of the dataset with a leading row-index
/// column.
pub fn preview_table(df: &DataFrame, rows: usize) -> Result<String> {
    let col_names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    let mut headers: Vec<&str> = vec![""];
    for name in &col_names {
        headers.push(name.as_str());
    }

    let shown = rows.min(df.height());
    let mut body = Vec::with_capacity(shown);
    for i in 0..shown {
        let mut row = Vec::with_capacity(df.width() + 1);
        row.push(i.to_string());
        for name in &col_names {
            let value = df.column(name)?.as_materialized_series().get(i)?;
            row.push(truncate_str(&fmt_cell(&value), MAX_CELL_WIDTH));
        }
        body.push(row);
    }

    Ok(render_aligned(&headers, &body))
}

/// Format one cell value; strings render without surrounding quotes.
fn fmt_cell(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => format!("{}", other),
    }
}

/// Truncate a string to `max_len` characters with an ellipsis.
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", prefix)
    }
}

/// Align headers and rows into fixed-width columns.
fn render_aligned(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);

    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for row in rows {
        push_row(&mut out, row.iter().cloned(), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let formatted: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(formatted.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiler::DataProfiler;

    #[test]
    fn test_overview_table_shape() {
        let df = df![
            "name" => ["Ada", "Alan"],
            "age" => [36i64, 41],
        ]
        .unwrap();
        let summaries = DataProfiler::summarize(&df).unwrap();

        let table = overview_table(&summaries);
        let lines: Vec<&str> = table.lines().collect();
        // header + rule + one line per column
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Column"));
        assert!(lines[0].contains("Non-Null Count"));
        assert!(lines[2].contains("name"));
        assert!(lines[3].contains("Int64"));
    }

    #[test]
    fn test_missing_table_counts() {
        let df = df![
            "a" => [Some(1i64), None, None],
        ]
        .unwrap();
        let summaries = DataProfiler::summarize(&df).unwrap();

        let table = missing_table(&summaries);
        assert!(table.contains("Missing Count"));
        assert!(table.lines().last().unwrap().contains('2'));
    }

    #[test]
    fn test_preview_table_row_limit_and_indices() {
        let df = df![
            "v" => [10i64, 20, 30, 40, 50, 60, 70],
        ]
        .unwrap();

        let table = preview_table(&df, 5).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        // header + rule + 5 rows
        assert_eq!(lines.len(), 7);
        assert!(lines[2].starts_with('0'));
        assert!(lines[6].starts_with('4'));
        assert!(!table.contains("60"));
    }

    #[test]
    fn test_preview_table_shorter_than_requested() {
        let df = df![
            "v" => [1i64, 2],
        ]
        .unwrap();

        let table = preview_table(&df, 5).unwrap();
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn test_preview_table_renders_nulls_and_strings() {
        let df = df![
            "name" => [Some("Ada"), None],
            "age" => [Some(36i64), None],
        ]
        .unwrap();

        let table = preview_table(&df, 5).unwrap();
        assert!(table.contains("Ada"));
        assert!(!table.contains("\"Ada\""));
        assert!(table.contains("null"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("abcdefghij", 6), "abc...");
        // multi-byte input must not panic
        assert_eq!(truncate_str("éééééééééé", 6), "ééé...");
    }
}
