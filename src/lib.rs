mod air_quality;
mod analysis;
mod dataset;
mod error;
mod frames;
mod types;
mod utils;

pub use air_quality::AirQuality;
pub use error::AirQualityError;

pub use analysis::classify::ComplianceSummary;
pub use analysis::error::AnalysisError;
pub use analysis::summary::ParameterStats;

pub use dataset::error::DataLoadError;
pub use dataset::loader::DatasetLoader;

pub use frames::observation_frame::ObservationLazyFrame;

pub use types::columns;
pub use types::limits::{AveragingWindow, LimitTable};
pub use types::parameter::Parameter;
pub use types::pollutant::Pollutant;
