//! CLI entry point for the CSV cleaning tool.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use polars::prelude::*;
use std::path::PathBuf;
use tidycsv::{
    cleaner::DataCleaner,
    config::{self, CleaningConfig, MissingStrategy},
    console,
    exporter::DatasetExporter,
    imputers::StatisticalImputer,
    loader::DatasetLoader,
    profiler::DataProfiler,
    render,
    types::CleaningSummary,
};
use tracing::{debug, info};

/// CLI-compatible missing-value strategy enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliMissingStrategy {
    /// Remove rows containing missing values
    Drop,
    /// Replace missing values (numeric: mean, categorical: mode)
    Replace,
}

impl From<CliMissingStrategy> for MissingStrategy {
    fn from(cli: CliMissingStrategy) -> Self {
        match cli {
            CliMissingStrategy::Drop => MissingStrategy::Drop,
            CliMissingStrategy::Replace => MissingStrategy::Replace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive CSV cleaning tool",
    long_about = "Loads a CSV dataset, reports its structure, removes duplicate rows,\n\
                  resolves missing values, previews the result, and writes a cleaned CSV.\n\n\
                  EXAMPLES:\n  \
                  # Interactive session over the default input file\n  \
                  tidycsv\n\n  \
                  # Explicit paths, non-interactive replace strategy\n  \
                  tidycsv -i survey.csv -o survey_clean.csv --strategy replace"
)]
struct Args {
    /// Path to the CSV file to clean
    #[arg(short, long, default_value = config::DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Path the cleaned CSV is written to (overwritten if it exists)
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Missing-value strategy; when omitted, the tool asks interactively
    #[arg(short, long, value_enum)]
    strategy: Option<CliMissingStrategy>,

    /// Number of rows shown in the cleaned-data preview
    #[arg(long, default_value_t = config::DEFAULT_PREVIEW_ROWS)]
    preview_rows: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Suppress log output below warnings
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.quiet);

    let mut config_builder = CleaningConfig::builder()
        .input_path(&args.input)
        .output_path(&args.output)
        .preview_rows(args.preview_rows);
    if let Some(strategy) = args.strategy {
        config_builder = config_builder.strategy(strategy.into());
    }
    let config = config_builder.build()?;

    // Load before anything is printed: a load failure must leave no partial
    // output behind.
    info!("loading dataset from: {}", config.input_path.display());
    let data = DatasetLoader::load(&config.input_path)?;

    run(config, data)
}

/// The seven-step cleaning session.
///
/// User-facing report output goes through `println!`/`console` on purpose;
/// `tracing` carries the operational log, filtered separately.
fn run(config: CleaningConfig, mut data: DataFrame) -> Result<()> {
    let rows_before = data.height();

    console::banner("DATA CLEANING STARTED");
    console::note("Welcome! Let the cleaning begin...");
    println!();

    // Dataset overview
    console::banner("DATASET OVERVIEW");
    let summaries = DataProfiler::summarize(&data)?;
    println!("{}", render::overview_table(&summaries));

    // Duplicate check
    console::banner("DUPLICATE CHECK");
    let (deduped, duplicates_removed) = DataCleaner::remove_duplicates(data)?;
    data = deduped;
    console::metric(&format!("Duplicates found → {}", duplicates_removed));
    if duplicates_removed > 0 {
        console::success("Duplicates removed successfully!");
    }
    println!();

    // Missing values (recomputed after deduplication)
    console::banner("MISSING VALUES");
    let summaries = DataProfiler::summarize(&data)?;
    println!("{}", render::missing_table(&summaries));

    // Cleaning choice: injected via --strategy, or exactly one stdin read
    let strategy = match config.strategy {
        Some(strategy) => {
            info!("using injected strategy: {:?}", strategy);
            Some(strategy)
        }
        None => match console::prompt_choice("Remove or replace missing values? (d / r) →") {
            Ok(line) => MissingStrategy::from_token(&line),
            Err(e) => {
                console::warn(&format!("Could not read choice: {}", e));
                None
            }
        },
    };

    console::banner("CLEANING IN PROGRESS");
    let mut processing_steps = Vec::new();
    let mut rows_dropped = 0;
    let mut cells_imputed = 0;

    match strategy {
        Some(MissingStrategy::Drop) => {
            let (filtered, dropped) = DataCleaner::drop_missing_rows(data)?;
            data = filtered;
            rows_dropped = dropped;
            console::success("Rows with missing values removed!");
        }
        Some(MissingStrategy::Replace) => {
            cells_imputed =
                StatisticalImputer::impute_missing(&mut data, &summaries, &mut processing_steps)?;
            for step in &processing_steps {
                debug!("{}", step);
            }
            console::success("Missing values replaced successfully!");
        }
        None => {
            console::warn("Invalid choice — no changes made.");
        }
    }
    println!();

    // Preview of the cleaned data; a render failure is a warning, not an abort
    match render::preview_table(&data, config.preview_rows) {
        Ok(table) => {
            console::banner("CLEANED DATA PREVIEW");
            println!("{}", table);
        }
        Err(e) => {
            console::warn(&format!("Could not display table: {}", e));
        }
    }

    // Export; failure is reported but this is the last mutation-free step
    match DatasetExporter::write_csv(&mut data, &config.output_path) {
        Ok(()) => {
            console::success(&format!(
                "Clean data saved as → {}",
                config.output_path.display()
            ));
        }
        Err(e) => {
            console::warn(&format!("Could not save file: {}", e));
        }
    }
    println!();

    let summary = CleaningSummary {
        rows_before,
        rows_after: data.height(),
        duplicates_removed,
        rows_dropped,
        cells_imputed,
        strategy,
    };
    print_summary(&summary);

    console::banner("DATA CLEANING COMPLETE");
    Ok(())
}

fn print_summary(summary: &CleaningSummary) {
    println!(
        "Rows: {} -> {} ({} duplicates removed, {} dropped)",
        summary.rows_before, summary.rows_after, summary.duplicates_removed, summary.rows_dropped
    );
    println!("Missing cells filled: {}", summary.cells_imputed);
    match summary.strategy {
        Some(MissingStrategy::Drop) => println!("Strategy: drop rows with missing values"),
        Some(MissingStrategy::Replace) => println!("Strategy: replace (mean / mode)"),
        None => println!("Strategy: none (dataset left as-is)"),
    }
    println!();
}
