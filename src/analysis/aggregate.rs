//! Daily and yearly mean aggregates over a filtered view.

use crate::analysis::error::AnalysisError;
use crate::frames::observation_frame::ObservationLazyFrame;
use crate::types::columns::{DATE, DATETIME, STATION, YEAR};
use crate::types::pollutant::Pollutant;
use polars::prelude::{col, DataFrame, Expr, SortMultipleOptions};

impl ObservationLazyFrame {
    /// Mean pollutant concentrations per (date, station) pair.
    ///
    /// One row per distinct pair present in the view; each
    /// `<pollutant>_interpolated` column holds the arithmetic mean over the
    /// group. Rows are sorted ascending by (date, station) so repeated runs
    /// over the same selection produce identical output.
    pub fn daily_average(&self) -> Result<DataFrame, AnalysisError> {
        let frame = self
            .frame
            .clone()
            .group_by([col(DATE), col(STATION)])
            .agg(pollutant_means())
            .sort_by_exprs([col(DATE), col(STATION)], SortMultipleOptions::default())
            .collect()?;
        Ok(frame)
    }

    /// Mean pollutant concentrations per calendar year, sorted ascending.
    ///
    /// Meaningful when the selected span exceeds 365 days; the caller decides
    /// via [`ObservationLazyFrame::date_span`] whether to request it.
    pub fn yearly_average(&self) -> Result<DataFrame, AnalysisError> {
        let frame = self
            .frame
            .clone()
            .with_columns([col(DATETIME).dt().year().alias(YEAR)])
            .group_by([col(YEAR)])
            .agg(pollutant_means())
            .sort_by_exprs([col(YEAR)], SortMultipleOptions::default())
            .collect()?;
        Ok(frame)
    }
}

fn pollutant_means() -> Vec<Expr> {
    Pollutant::ALL
        .iter()
        .map(|pollutant| col(pollutant.interpolated_column()).mean())
        .collect()
}
