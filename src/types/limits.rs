//! Regulatory pollutant limits, keyed by averaging window.

use crate::types::pollutant::Pollutant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

/// The averaging window a regulatory threshold applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AveragingWindow {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "8h")]
    EightHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "year")]
    Year,
}

impl fmt::Display for AveragingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AveragingWindow::OneHour => "1h",
            AveragingWindow::EightHour => "8h",
            AveragingWindow::TwentyFourHour => "24h",
            AveragingWindow::Year => "year",
        };
        write!(f, "{label}")
    }
}

/// Immutable mapping from pollutant to its per-window thresholds.
///
/// Defined once and shared read-only by the compliance check. The [`Default`]
/// table carries the reference limits; a custom table can be loaded from JSON
/// of the shape `{"PM2.5": {"1h": 75.0, "24h": 45.0}, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitTable(BTreeMap<Pollutant, BTreeMap<AveragingWindow, f64>>);

impl LimitTable {
    /// The threshold for `pollutant` at `window`, if the table defines one.
    pub fn threshold(&self, pollutant: Pollutant, window: AveragingWindow) -> Option<f64> {
        self.0.get(&pollutant)?.get(&window).copied()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

impl Default for LimitTable {
    fn default() -> Self {
        use AveragingWindow::{EightHour, OneHour, TwentyFourHour, Year};
        let entries: [(Pollutant, &[(AveragingWindow, f64)]); 6] = [
            (Pollutant::Pm25, &[(OneHour, 75.0), (TwentyFourHour, 45.0)]),
            (Pollutant::Pm10, &[(TwentyFourHour, 150.0), (Year, 70.0)]),
            (
                Pollutant::So2,
                &[(OneHour, 500.0), (TwentyFourHour, 450.0), (Year, 60.0)],
            ),
            (
                Pollutant::No2,
                &[(OneHour, 2000.0), (TwentyFourHour, 80.0), (Year, 40.0)],
            ),
            (Pollutant::Co, &[(OneHour, 4000.0), (TwentyFourHour, 10000.0)]),
            (Pollutant::O3, &[(OneHour, 200.0), (EightHour, 160.0)]),
        ];
        Self(
            entries
                .iter()
                .map(|(pollutant, windows)| (*pollutant, windows.iter().copied().collect()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_carries_the_reference_limits() {
        let limits = LimitTable::default();
        assert_eq!(limits.threshold(Pollutant::Pm25, AveragingWindow::OneHour), Some(75.0));
        assert_eq!(
            limits.threshold(Pollutant::Pm10, AveragingWindow::TwentyFourHour),
            Some(150.0)
        );
        assert_eq!(limits.threshold(Pollutant::So2, AveragingWindow::Year), Some(60.0));
        assert_eq!(limits.threshold(Pollutant::No2, AveragingWindow::OneHour), Some(2000.0));
        assert_eq!(
            limits.threshold(Pollutant::Co, AveragingWindow::TwentyFourHour),
            Some(10000.0)
        );
        assert_eq!(limits.threshold(Pollutant::O3, AveragingWindow::EightHour), Some(160.0));
    }

    #[test]
    fn missing_entries_yield_none() {
        let limits = LimitTable::default();
        assert_eq!(limits.threshold(Pollutant::Pm10, AveragingWindow::OneHour), None);
        assert_eq!(limits.threshold(Pollutant::O3, AveragingWindow::Year), None);
    }

    #[test]
    fn table_round_trips_through_json() {
        let limits = LimitTable::default();
        let json = serde_json::to_string(&limits).unwrap();
        let parsed = LimitTable::from_json_str(&json).unwrap();
        assert_eq!(parsed, limits);
    }

    #[test]
    fn custom_table_parses_from_json() {
        let limits = LimitTable::from_json_str(r#"{"PM2.5": {"1h": 80.0}, "O3": {"8h": 120.0}}"#)
            .unwrap();
        assert_eq!(limits.threshold(Pollutant::Pm25, AveragingWindow::OneHour), Some(80.0));
        assert_eq!(limits.threshold(Pollutant::O3, AveragingWindow::EightHour), Some(120.0));
        assert_eq!(limits.threshold(Pollutant::So2, AveragingWindow::OneHour), None);
    }
}
