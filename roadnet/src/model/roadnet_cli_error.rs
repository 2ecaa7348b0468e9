use super::RoadNetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadNetCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure running road network pipeline: {source}")]
    RoadNetError {
        #[from]
        source: RoadNetError,
    },
    #[error("failure reading configuration: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
