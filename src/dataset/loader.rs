//! Extracts, parses and caches the observation dataset.

use crate::dataset::error::DataLoadError;
use crate::types::columns::{self, DATE, DATETIME};
use log::{info, warn};
use polars::prelude::*;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use ::zip::ZipArchive;

/// Loads the hourly observation table from a zip archive holding one CSV file.
///
/// The parsed frame is cached as a parquet file keyed by the archive's file
/// stem, so repeated loads of the same input skip extraction and parsing and
/// scan the cache instead. The source archive never changes during a run, so
/// the cache needs no invalidation.
pub struct DatasetLoader {
    cache_dir: PathBuf,
}

impl DatasetLoader {
    pub fn new(cache_dir: &Path) -> DatasetLoader {
        DatasetLoader {
            cache_dir: cache_dir.to_path_buf(),
        }
    }

    /// Returns the observation table as a `LazyFrame`.
    ///
    /// On a cache miss this extracts the first `.csv` entry of `archive`,
    /// parses it, validates that every required column is present, parses the
    /// `DateTime` column and derives the calendar `date` column, then writes
    /// the result to the parquet cache.
    pub fn load(&self, archive: &Path) -> Result<LazyFrame, DataLoadError> {
        let stem = archive
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("dataset");
        let parquet_path = self.cache_dir.join(format!("{stem}.parquet"));

        if parquet_path.exists() {
            info!("cache hit for {:?} at {:?}", archive, parquet_path);
        } else {
            warn!("cache miss for {:?}, extracting and parsing", archive);
            let (entry, bytes) = Self::extract_csv(archive)?;
            let frame = Self::parse_csv(&entry, &bytes)?;
            Self::validate_columns(&frame)?;
            let frame = derive_time_columns(frame)?;

            std::fs::create_dir_all(&self.cache_dir)
                .map_err(|e| DataLoadError::CacheDirCreation(self.cache_dir.clone(), e))?;
            Self::cache_dataframe(frame, &parquet_path)?;
            info!("cached parsed dataset at {:?}", parquet_path);
        }

        LazyFrame::scan_parquet(&parquet_path, Default::default())
            .map_err(|e| DataLoadError::ParquetScan(parquet_path.clone(), e))
    }

    /// Reads the first CSV entry of the archive into memory.
    fn extract_csv(archive_path: &Path) -> Result<(String, Vec<u8>), DataLoadError> {
        let file = File::open(archive_path)
            .map_err(|e| DataLoadError::ArchiveOpen(archive_path.to_path_buf(), e))?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| DataLoadError::ArchiveRead(archive_path.to_path_buf(), e))?;

        let entry_name = archive
            .file_names()
            .find(|name| name.ends_with(".csv"))
            .map(str::to_string)
            .ok_or_else(|| DataLoadError::MissingEntry(archive_path.to_path_buf()))?;

        let mut entry = archive
            .by_name(&entry_name)
            .map_err(|e| DataLoadError::ArchiveRead(archive_path.to_path_buf(), e))?;
        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| DataLoadError::ExtractIo {
                entry: entry_name.clone(),
                source: e,
            })?;
        info!("extracted {} bytes from entry '{}'", bytes.len(), entry_name);
        Ok((entry_name, bytes))
    }

    /// Parses raw CSV bytes into a DataFrame via a temp file.
    fn parse_csv(entry: &str, bytes: &[u8]) -> Result<DataFrame, DataLoadError> {
        let io_err = |source| DataLoadError::ExtractIo {
            entry: entry.to_string(),
            source,
        };
        let mut temp_file = NamedTempFile::new().map_err(io_err)?;
        temp_file.write_all(bytes).map_err(io_err)?;
        temp_file.flush().map_err(io_err)?;

        CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(temp_file.path().to_path_buf()))
            .map_err(|e| DataLoadError::CsvParse {
                entry: entry.to_string(),
                source: e,
            })?
            .finish()
            .map_err(|e| DataLoadError::CsvParse {
                entry: entry.to_string(),
                source: e,
            })
    }

    fn validate_columns(frame: &DataFrame) -> Result<(), DataLoadError> {
        let present = frame.get_column_names();
        for required in columns::required_columns() {
            if !present.iter().any(|name| name.as_str() == required) {
                return Err(DataLoadError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }

    fn cache_dataframe(mut frame: DataFrame, path: &Path) -> Result<(), DataLoadError> {
        let file = File::create(path)
            .map_err(|e| DataLoadError::ParquetWriteIo(path.to_path_buf(), e))?;
        ParquetWriter::new(file)
            .with_compression(ParquetCompression::Snappy)
            .finish(&mut frame)
            .map_err(|e| DataLoadError::ParquetWritePolars(path.to_path_buf(), e))?;
        Ok(())
    }
}

/// Parses the `DateTime` string column to a millisecond datetime and derives
/// the calendar `date` column used as the daily grouping key.
pub(crate) fn derive_time_columns(frame: DataFrame) -> Result<DataFrame, DataLoadError> {
    frame
        .lazy()
        .with_columns([col(DATETIME).str().to_datetime(
            Some(TimeUnit::Milliseconds),
            None,
            StrptimeOptions {
                format: Some("%Y-%m-%d %H:%M:%S".into()),
                strict: true,
                exact: true,
                cache: false,
            },
            lit("raise"),
        )])
        .with_columns([col(DATETIME).dt().date().alias(DATE)])
        .collect()
        .map_err(DataLoadError::TimestampParse)
}
