//! The closed set of meteorological parameter series.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five external (meteorological) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Parameter {
    #[serde(rename = "TEMP")]
    Temperature,
    #[serde(rename = "PRES")]
    Pressure,
    #[serde(rename = "DEWP")]
    DewPoint,
    #[serde(rename = "RAIN")]
    Rainfall,
    #[serde(rename = "WSPM")]
    WindSpeed,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::Temperature,
        Parameter::Pressure,
        Parameter::DewPoint,
        Parameter::Rainfall,
        Parameter::WindSpeed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Temperature => "TEMP",
            Parameter::Pressure => "PRES",
            Parameter::DewPoint => "DEWP",
            Parameter::Rainfall => "RAIN",
            Parameter::WindSpeed => "WSPM",
        }
    }

    /// Gap-filled hourly reading column.
    pub fn interpolated_column(&self) -> &'static str {
        match self {
            Parameter::Temperature => "TEMP_interpolated",
            Parameter::Pressure => "PRES_interpolated",
            Parameter::DewPoint => "DEWP_interpolated",
            Parameter::Rainfall => "RAIN_interpolated",
            Parameter::WindSpeed => "WSPM_interpolated",
        }
    }

    /// Pre-computed daily average column, the crossplot color source.
    pub fn day_avg_column(&self) -> &'static str {
        match self {
            Parameter::Temperature => "TEMP_day_avg",
            Parameter::Pressure => "PRES_day_avg",
            Parameter::DewPoint => "DEWP_day_avg",
            Parameter::Rainfall => "RAIN_day_avg",
            Parameter::WindSpeed => "WSPM_day_avg",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_accessors_match_the_wire_format() {
        assert_eq!(Parameter::Temperature.interpolated_column(), "TEMP_interpolated");
        assert_eq!(Parameter::WindSpeed.day_avg_column(), "WSPM_day_avg");
        assert_eq!(Parameter::DewPoint.to_string(), "DEWP");
    }
}
