//! Interactive CSV Cleaning Library
//!
//! Building blocks for a single-run CSV cleaning session built on Polars:
//!
//! - **Loading**: CSV parsing with a Windows-1252 fallback for non-UTF-8 input
//! - **Profiling**: per-column dtype, class, and null counts
//! - **Cleaning**: exact-duplicate removal, whole-row null dropping
//! - **Imputation**: mean/mode replacement dispatched on the profiled class
//! - **Rendering**: width-aligned report tables
//! - **Export**: cleaned CSV written without an index column
//!
//! The binary sequences these steps top-to-bottom with one interactive
//! decision point (drop vs. replace missing values); the library keeps every
//! step free of console input so each is independently testable.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tidycsv::{
//!     cleaner::DataCleaner, config::MissingStrategy, imputers::StatisticalImputer,
//!     loader::DatasetLoader, profiler::DataProfiler,
//! };
//!
//! let df = DatasetLoader::load(Path::new("data.csv"))?;
//! let (df, duplicates) = DataCleaner::remove_duplicates(df)?;
//! let summaries = DataProfiler::summarize(&df)?;
//!
//! let mut df = df;
//! let mut steps = Vec::new();
//! let filled = StatisticalImputer::impute_missing(&mut df, &summaries, &mut steps)?;
//! println!("removed {duplicates} duplicates, filled {filled} cells");
//! ```

pub mod cleaner;
pub mod config;
pub mod console;
pub mod error;
pub mod exporter;
pub mod imputers;
pub mod loader;
pub mod profiler;
pub mod render;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::DataCleaner;
pub use config::{
    CleaningConfig, CleaningConfigBuilder, ConfigValidationError, MissingStrategy,
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_PREVIEW_ROWS,
};
pub use error::{CleaningError, Result as CleaningResult, ResultExt};
pub use exporter::DatasetExporter;
pub use imputers::StatisticalImputer;
pub use loader::DatasetLoader;
pub use profiler::DataProfiler;
pub use types::{CleaningSummary, ColumnClass, ColumnSummary};
pub use utils::{column_class, fill_numeric_nulls, fill_string_nulls, is_numeric_dtype, string_mode};
