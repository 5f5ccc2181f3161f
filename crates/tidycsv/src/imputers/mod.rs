//! Imputation module for handling missing values.
//!
//! Provides per-column statistical replacement: mean for numeric columns,
//! mode for categorical columns, dispatched on the profiled column class.

mod statistical;

pub use statistical::StatisticalImputer;
