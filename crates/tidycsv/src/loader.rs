//! CSV loading with an encoding fallback.
//!
//! Exported CSVs from spreadsheet tools are frequently Latin-1 rather than
//! UTF-8, so the loader reads raw bytes and decodes with a Windows-1252
//! fallback before handing the text to the CSV parser.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use tracing::{debug, info};

use crate::error::{CleaningError, Result};

/// Schema inference window for the CSV parser.
const INFER_SCHEMA_ROWS: usize = 100;

/// Loads a CSV file into a [`DataFrame`].
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load `path` as a CSV dataset.
    ///
    /// The file must exist; there is no retry and no alternate path search.
    /// Bytes that are not valid UTF-8 are decoded as Windows-1252.
    ///
    /// # Errors
    ///
    /// [`CleaningError::InputNotFound`] when the path does not exist, the
    /// underlying IO or parse error otherwise. Either way no dataset is
    /// produced.
    pub fn load(path: &Path) -> Result<DataFrame> {
        if !path.exists() {
            return Err(CleaningError::InputNotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        let content = decode_text(bytes);

        let cursor = Cursor::new(content);
        let df = CsvReadOptions::default()
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .with_has_header(true)
            .into_reader_with_file_handle(cursor)
            .finish()?;

        info!("loaded {} rows x {} columns from {}", df.height(), df.width(), path.display());
        Ok(df)
    }
}

/// Decode file bytes as UTF-8, falling back to Windows-1252.
fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            debug!("input is not valid UTF-8, decoded {} bytes as Windows-1252", bytes.len());
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file() {
        let err = DatasetLoader::load(Path::new("does_not_exist.csv")).unwrap_err();
        assert!(matches!(err, CleaningError::InputNotFound(_)));
    }

    #[test]
    fn test_load_utf8_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        fs::write(&path, "name,age\nAda,36\nAlan,41\n").unwrap();

        let df = DatasetLoader::load(&path).unwrap();
        assert_eq!(df.shape(), (2, 2));
    }

    #[test]
    fn test_load_latin1_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        let mut file = fs::File::create(&path).unwrap();
        // "café" with 0xE9, invalid as UTF-8
        file.write_all(b"name,city\nRen\xe9,Montr\xe9al\n").unwrap();
        drop(file);

        let df = DatasetLoader::load(&path).unwrap();
        assert_eq!(df.shape(), (1, 2));
        let city = df.column("city").unwrap().get(0).unwrap().to_string();
        assert!(city.contains("Montréal"));
    }

    #[test]
    fn test_decode_text_keeps_valid_utf8() {
        let text = decode_text("héllo".as_bytes().to_vec());
        assert_eq!(text, "héllo");
    }
}
