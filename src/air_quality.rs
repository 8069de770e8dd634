//! This module provides the main entry point for working with an air-quality
//! observation dataset: loading it once, enumerating its stations and date
//! bounds, and deriving filtered views for downstream summaries.

use crate::analysis::classify::ComplianceSummary;
use crate::dataset::error::DataLoadError;
use crate::dataset::loader::DatasetLoader;
use crate::error::AirQualityError;
use crate::frames::observation_frame::ObservationLazyFrame;
use crate::types::columns::STATION;
use crate::types::limits::LimitTable;
use crate::utils::default_cache_dir;
use bon::bon;
use chrono::NaiveDate;
use polars::prelude::{col, ChunkUnique, LazyFrame};
use std::path::PathBuf;

/// The main client for an air-quality dataset.
///
/// Built once at process start, it holds the loaded observation table as
/// immutable, shareable state; every user-driven parameter change derives an
/// independent [`ObservationLazyFrame`] view from it, so any number of
/// recomputation passes can run against the same load.
///
/// # Examples
///
/// ```no_run
/// # use airquality::{AirQuality, AirQualityError};
/// # fn run() -> Result<(), AirQualityError> {
/// let client = AirQuality::builder()
///     .archive("final_airquality.zip".into())
///     .build()?;
///
/// let (first, last) = client.date_span()?;
/// let view = client
///     .select()
///     .start(first)
///     .end(last)
///     .stations(client.stations()?)
///     .call()?;
///
/// for station in client.stations()? {
///     let summary = client.compliance(&view, &station)?;
///     match summary.good_percentage() {
///         Ok(percentage) => println!("{station}: {percentage:.2}% healthy hours"),
///         Err(_) => println!("{station}: N/A"),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct AirQuality {
    frame: LazyFrame,
    limits: LimitTable,
}

#[bon]
impl AirQuality {
    /// Loads the dataset from `archive` and builds the client.
    ///
    /// # Arguments
    ///
    /// * `.archive(PathBuf)`: **Required.** The zip archive holding the
    ///   observation CSV.
    /// * `.cache_dir(PathBuf)`: Optional. Where the parsed dataset is cached
    ///   as parquet; defaults to the platform cache directory.
    /// * `.limits(LimitTable)`: Optional. Pollutant limits for the compliance
    ///   summaries; defaults to the reference table.
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError`] variants (wrapped in [`AirQualityError`])
    /// when the archive is missing or corrupt, holds no CSV entry, or the CSV
    /// lacks required columns; the caller is expected to surface this as a
    /// warning and render an empty state rather than crash.
    #[builder]
    pub fn new(
        archive: PathBuf,
        cache_dir: Option<PathBuf>,
        limits: Option<LimitTable>,
    ) -> Result<Self, AirQualityError> {
        let cache_dir = match cache_dir {
            Some(dir) => dir,
            None => default_cache_dir().ok_or(DataLoadError::CacheDirResolution)?,
        };
        let frame = DatasetLoader::new(&cache_dir).load(&archive)?;
        Ok(Self {
            frame,
            limits: limits.unwrap_or_default(),
        })
    }

    /// A view over the full observation table.
    pub fn observations(&self) -> ObservationLazyFrame {
        ObservationLazyFrame::new(self.frame.clone())
    }

    /// Derives the view for one dashboard pass: observations whose date lies
    /// in `[start, end]` (inclusive) and whose station is in `stations`.
    ///
    /// An empty `stations` list yields an empty view, never all stations.
    ///
    /// # Errors
    ///
    /// [`crate::AnalysisError::InvalidRange`] when `start` is after `end`.
    #[builder]
    pub fn select(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        stations: Vec<String>,
    ) -> Result<ObservationLazyFrame, AirQualityError> {
        Ok(self
            .observations()
            .date_range(start, end)?
            .with_stations(&stations))
    }

    /// Sorted unique station identifiers of the dataset, for the station
    /// selection widget.
    pub fn stations(&self) -> Result<Vec<String>, AirQualityError> {
        let frame = self.frame.clone().select([col(STATION)]).collect()?;
        let mut names: Vec<String> = frame
            .column(STATION)?
            .str()?
            .unique()?
            .into_iter()
            .flatten()
            .map(String::from)
            .collect();
        names.sort();
        Ok(names)
    }

    /// The dataset's observed (earliest, latest) calendar dates, bounding the
    /// date pickers.
    pub fn date_span(&self) -> Result<(NaiveDate, NaiveDate), AirQualityError> {
        Ok(self.observations().date_span()?)
    }

    /// The limit table the client was configured with.
    pub fn limits(&self) -> &LimitTable {
        &self.limits
    }

    /// Compliance summary for `station` over `view`, using the configured
    /// limits.
    pub fn compliance(
        &self,
        view: &ObservationLazyFrame,
        station: &str,
    ) -> Result<ComplianceSummary, AirQualityError> {
        Ok(view.compliance(station, &self.limits)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::columns;
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn sample_csv() -> String {
        let header = columns::required_columns();
        let mut lines = vec![header.join(",")];
        for (datetime, station) in [
            ("2017-01-01 00:00:00", "Aotizhongxin"),
            ("2017-01-01 01:00:00", "Aotizhongxin"),
            ("2017-01-02 00:00:00", "Changping"),
            ("2017-01-03 00:00:00", "Changping"),
        ] {
            let mut fields = vec![datetime.to_string(), station.to_string()];
            fields.extend(std::iter::repeat("1.0".to_string()).take(header.len() - 2));
            lines.push(fields.join(","));
        }
        lines.join("\n")
    }

    fn write_archive(dir: &Path) -> PathBuf {
        let path = dir.join("final_airquality.zip");
        let file = File::create(&path).unwrap();
        let mut writer = ZipWriter::new(file);
        writer
            .start_file("final_airquality.csv", FileOptions::default())
            .unwrap();
        writer.write_all(sample_csv().as_bytes()).unwrap();
        writer.finish().unwrap();
        path
    }

    fn client(dir: &Path) -> AirQuality {
        AirQuality::builder()
            .archive(write_archive(dir))
            .cache_dir(dir.join("cache"))
            .build()
            .unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn stations_are_unique_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let client = client(dir.path());
        assert_eq!(client.stations().unwrap(), ["Aotizhongxin", "Changping"]);
    }

    #[test]
    fn date_span_covers_the_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let client = client(dir.path());
        assert_eq!(
            client.date_span().unwrap(),
            (date(2017, 1, 1), date(2017, 1, 3))
        );
    }

    #[test]
    fn select_applies_range_and_station_set() {
        let dir = tempfile::tempdir().unwrap();
        let client = client(dir.path());

        let view = client
            .select()
            .start(date(2017, 1, 1))
            .end(date(2017, 1, 2))
            .stations(vec!["Changping".to_string()])
            .call()
            .unwrap();
        assert_eq!(view.collect().unwrap().height(), 1);

        let empty = client
            .select()
            .start(date(2017, 1, 1))
            .end(date(2017, 1, 3))
            .stations(vec![])
            .call()
            .unwrap();
        assert_eq!(empty.collect().unwrap().height(), 0);
    }

    #[test]
    fn compliance_uses_the_configured_limits() {
        let dir = tempfile::tempdir().unwrap();
        let client = client(dir.path());

        let view = client
            .select()
            .start(date(2017, 1, 1))
            .end(date(2017, 1, 3))
            .stations(vec!["Aotizhongxin".to_string(), "Changping".to_string()])
            .call()
            .unwrap();

        // Every fixture reading is 1.0, far below each default limit.
        let summary = client.compliance(&view, "Aotizhongxin").unwrap();
        assert_eq!(summary.total_hours, 2);
        assert_eq!(summary.good_hours, 2);
        assert_eq!(summary.good_percentage().unwrap(), 100.0);
    }
}
