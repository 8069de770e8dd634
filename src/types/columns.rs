//! Column names of the observation table.
//!
//! The CSV header is the wire format; every module addresses columns through
//! these constants or the accessors on [`Pollutant`] and [`Parameter`] rather
//! than building column names from strings.

use crate::types::parameter::Parameter;
use crate::types::pollutant::Pollutant;

/// Hourly timestamp column, parsed to a millisecond datetime at load time.
pub const DATETIME: &str = "DateTime";

/// Monitoring station identifier column.
pub const STATION: &str = "station";

/// Calendar date derived from [`DATETIME`] at load time; the daily grouping key.
pub const DATE: &str = "date";

/// Calendar year derived from [`DATETIME`] for the yearly aggregate.
pub(crate) const YEAR: &str = "year";

/// Pre-computed 1-hour rolling average of O3.
pub const O3_HOUR_AVG: &str = "O3_hour_avg";

/// Pre-computed 8-hour rolling average of O3.
pub const O3_8HOUR_AVG: &str = "O3_8hour_avg";

/// Every column the input file must provide.
pub fn required_columns() -> Vec<&'static str> {
    let mut columns = vec![DATETIME, STATION];
    for pollutant in Pollutant::ALL {
        columns.push(pollutant.interpolated_column());
        columns.push(pollutant.day_avg_column());
    }
    columns.push(O3_HOUR_AVG);
    columns.push(O3_8HOUR_AVG);
    for parameter in Parameter::ALL {
        columns.push(parameter.interpolated_column());
        columns.push(parameter.day_avg_column());
    }
    columns
}
