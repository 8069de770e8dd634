//! Descriptive statistics for the meteorological parameters.

use crate::analysis::error::AnalysisError;
use crate::frames::observation_frame::ObservationLazyFrame;
use crate::types::parameter::Parameter;
use polars::prelude::{col, DataType};
use serde::Serialize;

/// Min, max and mean of one meteorological series over a filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterStats {
    pub parameter: Parameter,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ObservationLazyFrame {
    /// Summarizes the interpolated series of `parameter` over the view.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NotAvailable`] when the column holds no non-null
    /// values in the selection; no NaN or sentinel value is ever returned.
    pub fn parameter_stats(&self, parameter: Parameter) -> Result<ParameterStats, AnalysisError> {
        let series = col(parameter.interpolated_column()).cast(DataType::Float64);
        let stats = self
            .frame
            .clone()
            .select([
                series.clone().min().alias("min"),
                series.clone().max().alias("max"),
                series.mean().alias("mean"),
            ])
            .collect()?;

        let value = |name: &str| -> Result<Option<f64>, AnalysisError> {
            Ok(stats.column(name)?.f64()?.get(0))
        };
        match (value("min")?, value("max")?, value("mean")?) {
            (Some(min), Some(max), Some(mean)) => Ok(ParameterStats {
                parameter,
                min,
                max,
                mean,
            }),
            _ => Err(AnalysisError::NotAvailable { parameter }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn stats_cover_min_max_and_mean() {
        let frame = df!(
            "TEMP_interpolated" => [Some(-2.0), Some(10.0), Some(4.0)],
        )
        .unwrap();
        let stats = ObservationLazyFrame::new(frame.lazy())
            .parameter_stats(Parameter::Temperature)
            .unwrap();
        assert_eq!(stats.min, -2.0);
        assert_eq!(stats.max, 10.0);
        assert_eq!(stats.mean, 4.0);
        assert_eq!(stats.parameter, Parameter::Temperature);
    }

    #[test]
    fn nulls_are_ignored_in_the_statistics() {
        let frame = df!(
            "RAIN_interpolated" => [Some(1.0), None, Some(3.0)],
        )
        .unwrap();
        let stats = ObservationLazyFrame::new(frame.lazy())
            .parameter_stats(Parameter::Rainfall)
            .unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.mean, 2.0);
    }

    #[test]
    fn all_null_series_fails_with_not_available() {
        let frame = df!(
            "WSPM_interpolated" => [None::<f64>, None, None],
        )
        .unwrap();
        let err = ObservationLazyFrame::new(frame.lazy())
            .parameter_stats(Parameter::WindSpeed)
            .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::NotAvailable {
                parameter: Parameter::WindSpeed
            }
        ));
    }
}
