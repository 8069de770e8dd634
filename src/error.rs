use crate::analysis::error::AnalysisError;
use crate::dataset::error::DataLoadError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirQualityError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Dataframe operation failed")]
    Polars(#[from] PolarsError),
}
