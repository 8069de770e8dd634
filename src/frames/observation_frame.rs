//! Contains the `ObservationLazyFrame` structure for lazy operations on the
//! hourly observation table.

use crate::analysis::error::AnalysisError;
use crate::types::columns::{DATE, STATION};
use chrono::NaiveDate;
use polars::prelude::{col, lit, DataFrame, Expr, LazyFrame};

/// A wrapper around a polars `LazyFrame` holding hourly air-quality
/// observations.
///
/// Every filtering method is pure: it leaves `self` untouched and returns a
/// new view, so any number of selections can be derived from the same loaded
/// dataset. Nothing is computed until a summarizing method or [`collect`]
/// runs the plan.
///
/// Instances are obtained from [`crate::AirQuality::observations`] or
/// [`crate::AirQuality::select`], or directly via [`ObservationLazyFrame::new`]
/// for frames prepared elsewhere.
///
/// [`collect`]: ObservationLazyFrame::collect
#[derive(Clone)]
pub struct ObservationLazyFrame {
    /// The underlying polars LazyFrame.
    pub frame: LazyFrame,
}

impl ObservationLazyFrame {
    /// Wraps a `LazyFrame` assumed to carry the observation schema, including
    /// the derived `date` column.
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Applies an arbitrary polars predicate, returning a new view.
    pub fn filter(&self, predicate: Expr) -> ObservationLazyFrame {
        ObservationLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps observations whose calendar date lies in `[start, end]`, both
    /// bounds inclusive.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidRange`] when `start` is after `end`; no
    /// partial result is produced.
    pub fn date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ObservationLazyFrame, AnalysisError> {
        if start > end {
            return Err(AnalysisError::InvalidRange { start, end });
        }
        Ok(self.filter(
            col(DATE)
                .gt_eq(lit(start))
                .and(col(DATE).lt_eq(lit(end))),
        ))
    }

    /// Keeps observations whose station is a member of `stations`.
    ///
    /// An empty set selects nothing; it is not shorthand for "all stations".
    pub fn with_stations<S: AsRef<str>>(&self, stations: &[S]) -> ObservationLazyFrame {
        let predicate = stations.iter().fold(lit(false), |acc, station| {
            acc.or(col(STATION).eq(lit(station.as_ref())))
        });
        self.filter(predicate)
    }

    /// Restricts the view to a single station.
    pub fn for_station(&self, station: &str) -> ObservationLazyFrame {
        self.filter(col(STATION).eq(lit(station)))
    }

    /// Runs the lazy plan and materializes the view.
    pub fn collect(&self) -> Result<DataFrame, AnalysisError> {
        Ok(self.frame.clone().collect()?)
    }

    /// Fails with [`AnalysisError::EmptySelection`] when the view holds no
    /// rows. Intended as the boundary check before rendering.
    pub fn require_data(&self) -> Result<(), AnalysisError> {
        if self.frame.clone().limit(1).collect()?.height() == 0 {
            return Err(AnalysisError::EmptySelection);
        }
        Ok(())
    }

    /// The observed (earliest, latest) calendar dates of the view, used to
    /// bound date pickers and to decide whether a yearly summary applies.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::EmptySelection`] when the view holds no rows.
    pub fn date_span(&self) -> Result<(NaiveDate, NaiveDate), AnalysisError> {
        let bounds = self
            .frame
            .clone()
            .select([col(DATE).min().alias("min"), col(DATE).max().alias("max")])
            .collect()?;
        let min = bounds.column("min")?.date()?.get(0);
        let max = bounds.column("max")?.date()?.get(0);
        match (min.and_then(date_from_days), max.and_then(date_from_days)) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => Err(AnalysisError::EmptySelection),
        }
    }
}

// Polars dates are days since 1970-01-01; NaiveDate counts from 0001-01-01.
fn date_from_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days + 719_163)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::loader::derive_time_columns;
    use crate::types::columns::DATETIME;
    use polars::prelude::*;

    fn observations() -> ObservationLazyFrame {
        let frame = df!(
            DATETIME => [
                "2017-01-01 00:00:00",
                "2017-01-01 01:00:00",
                "2017-01-02 00:00:00",
                "2017-01-03 00:00:00",
            ],
            STATION => ["Aotizhongxin", "Changping", "Aotizhongxin", "Changping"],
        )
        .unwrap();
        ObservationLazyFrame::new(derive_time_columns(frame).unwrap().lazy())
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn date_range_is_inclusive_on_both_bounds() {
        let view = observations()
            .date_range(date(2017, 1, 1), date(2017, 1, 2))
            .unwrap();
        let frame = view.collect().unwrap();
        assert_eq!(frame.height(), 3);

        let dates = frame.column(DATE).unwrap().date().unwrap();
        for days in dates.into_no_null_iter() {
            let observed = date_from_days(days).unwrap();
            assert!(observed >= date(2017, 1, 1) && observed <= date(2017, 1, 2));
        }
    }

    #[test]
    fn inverted_range_fails_with_invalid_range() {
        let err = observations()
            .date_range(date(2017, 1, 2), date(2017, 1, 1))
            .err()
            .unwrap();
        assert!(matches!(err, AnalysisError::InvalidRange { .. }));
    }

    #[test]
    fn station_filter_matches_membership_both_ways() {
        let view = observations().with_stations(&["Aotizhongxin"]);
        let frame = view.collect().unwrap();
        assert_eq!(frame.height(), 2);
        let stations = frame.column(STATION).unwrap().str().unwrap();
        assert!(stations.into_no_null_iter().all(|s| s == "Aotizhongxin"));
    }

    #[test]
    fn empty_station_set_selects_nothing() {
        let view = observations().with_stations::<&str>(&[]);
        assert_eq!(view.collect().unwrap().height(), 0);
    }

    #[test]
    fn filtering_is_idempotent() {
        let base = observations();
        let once = base
            .date_range(date(2017, 1, 1), date(2017, 1, 2))
            .unwrap()
            .with_stations(&["Aotizhongxin", "Changping"]);
        let twice = once
            .date_range(date(2017, 1, 1), date(2017, 1, 2))
            .unwrap()
            .with_stations(&["Aotizhongxin", "Changping"]);
        assert!(once.collect().unwrap().equals(&twice.collect().unwrap()));
    }

    #[test]
    fn date_span_reports_observed_bounds() {
        let (min, max) = observations().date_span().unwrap();
        assert_eq!(min, date(2017, 1, 1));
        assert_eq!(max, date(2017, 1, 3));
    }

    #[test]
    fn empty_view_fails_the_boundary_checks() {
        let empty = observations().with_stations::<&str>(&[]);
        assert!(matches!(
            empty.require_data().unwrap_err(),
            AnalysisError::EmptySelection
        ));
        assert!(matches!(
            empty.date_span().unwrap_err(),
            AnalysisError::EmptySelection
        ));
    }
}
