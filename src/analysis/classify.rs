//! Per-station evaluation of hourly readings against the pollutant limits.

use crate::analysis::error::AnalysisError;
use crate::frames::observation_frame::ObservationLazyFrame;
use crate::types::limits::LimitTable;
use crate::types::pollutant::Pollutant;
use polars::prelude::{col, lit, Expr};
use serde::Serialize;

/// Tally of observation hours for one station, split into hours where every
/// monitored pollutant stayed within its regulatory limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    pub station: String,
    /// Observation hours for the station within the selection.
    pub total_hours: usize,
    /// Hours where all six pollutant checks held simultaneously.
    pub good_hours: usize,
}

impl ComplianceSummary {
    /// Share of good hours, in percent.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::DivisionUndefined`] when the station has no
    /// observation hours in the selection; callers render this as "N/A".
    pub fn good_percentage(&self) -> Result<f64, AnalysisError> {
        if self.total_hours == 0 {
            return Err(AnalysisError::DivisionUndefined {
                station: self.station.clone(),
            });
        }
        Ok(self.good_hours as f64 / self.total_hours as f64 * 100.0)
    }
}

impl ObservationLazyFrame {
    /// Counts total and compliant observation hours for `station`.
    ///
    /// A station absent from the view yields `(0, 0)` rather than an error;
    /// only the percentage is undefined in that case.
    pub fn compliance(
        &self,
        station: &str,
        limits: &LimitTable,
    ) -> Result<ComplianceSummary, AnalysisError> {
        let station_view = self.for_station(station);
        let total_hours = station_view.collect()?.height();
        let good_hours = station_view
            .filter(good_hour_predicate(limits)?)
            .collect()?
            .height();
        Ok(ComplianceSummary {
            station: station.to_string(),
            total_hours,
            good_hours,
        })
    }
}

/// Conjunction of the six per-pollutant limit checks. A null reading fails
/// its comparison, so hours with missing values never count as good.
fn good_hour_predicate(limits: &LimitTable) -> Result<Expr, AnalysisError> {
    let mut predicate = lit(true);
    for pollutant in Pollutant::ALL {
        let window = pollutant.compliance_window();
        let threshold = limits
            .threshold(pollutant, window)
            .ok_or(AnalysisError::MissingLimit { pollutant, window })?;
        predicate = predicate.and(col(pollutant.compliance_column()).lt_eq(lit(threshold)));
    }
    Ok(predicate)
}
