use crate::types::limits::AveragingWindow;
use crate::types::parameter::Parameter;
use crate::types::pollutant::Pollutant;
use chrono::NaiveDate;
use polars::error::PolarsError;
use thiserror::Error;

/// Failures while filtering or summarizing a selection of observations.
///
/// These are expected, user-driven conditions (an inverted date range, a
/// selection with no rows) and are meant to be caught at the presentation
/// boundary and rendered as a message, never as a crash.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("The current selection holds no observations")]
    EmptySelection,

    #[error("Compliance percentage is undefined for station '{station}': no observation hours in range")]
    DivisionUndefined { station: String },

    #[error("No values available for parameter {parameter} in the current selection")]
    NotAvailable { parameter: Parameter },

    #[error("No {window} limit configured for {pollutant}")]
    MissingLimit {
        pollutant: Pollutant,
        window: AveragingWindow,
    },

    #[error("Dataframe operation failed")]
    Polars(#[from] PolarsError),
}
