use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;
use zip::result::ZipError;

/// Failures while turning the input archive into the observation table.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Failed to open archive '{0}'")]
    ArchiveOpen(PathBuf, #[source] std::io::Error),

    #[error("Failed to read archive '{0}'")]
    ArchiveRead(PathBuf, #[source] ZipError),

    #[error("No CSV entry found in archive '{0}'")]
    MissingEntry(PathBuf),

    #[error("I/O error extracting entry '{entry}'")]
    ExtractIo {
        entry: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV data from entry '{entry}'")]
    CsvParse {
        entry: String,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{0}' is missing from the dataset")]
    MissingColumn(String),

    #[error("Failed to parse the DateTime column")]
    TimestampParse(#[source] PolarsError),

    #[error("Failed to resolve a cache directory for the parsed dataset")]
    CacheDirResolution,

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("I/O error writing parquet cache file '{0}'")]
    ParquetWriteIo(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing parquet cache file '{0}'")]
    ParquetWritePolars(PathBuf, #[source] PolarsError),

    #[error("Failed to scan parquet cache file '{0}'")]
    ParquetScan(PathBuf, #[source] PolarsError),
}
