//! Plot-ready extracts: hourly time series and crossplot coordinates.

use crate::analysis::error::AnalysisError;
use crate::frames::observation_frame::ObservationLazyFrame;
use crate::types::columns::{DATETIME, STATION};
use crate::types::parameter::Parameter;
use crate::types::pollutant::Pollutant;
use polars::prelude::{col, DataFrame, SortMultipleOptions};

impl ObservationLazyFrame {
    /// Hourly plotting series for one pollutant: `(DateTime, station, value)`
    /// rows sorted by (station, DateTime). O3 is plotted as its 1-hour
    /// rolling average, every other pollutant as its interpolated reading.
    pub fn hourly_series(&self, pollutant: Pollutant) -> Result<DataFrame, AnalysisError> {
        let frame = self
            .frame
            .clone()
            .select([
                col(DATETIME),
                col(STATION),
                col(pollutant.hourly_series_column()).alias("value"),
            ])
            .sort_by_exprs([col(STATION), col(DATETIME)], SortMultipleOptions::default())
            .collect()?;
        Ok(frame)
    }

    /// Scatter coordinates for a pollutant-vs-pollutant crossplot, colored by
    /// a meteorological parameter.
    ///
    /// Axes read the pollutant daily averages (O3 its 8-hour rolling
    /// average), color reads the parameter daily average; rows with any null
    /// are dropped so every triple is plottable.
    pub fn crossplot(
        &self,
        x: Pollutant,
        y: Pollutant,
        color: Parameter,
    ) -> Result<DataFrame, AnalysisError> {
        let frame = self
            .frame
            .clone()
            .select([
                col(x.crossplot_column()).alias("x"),
                col(y.crossplot_column()).alias("y"),
                col(color.day_avg_column()).alias("color"),
            ])
            .drop_nulls(None)
            .collect()?;
        Ok(frame)
    }
}
