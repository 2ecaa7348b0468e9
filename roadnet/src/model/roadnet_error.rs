use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadNetError {
    #[error("invalid roadnet configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading source '{0}': {1}")]
    SourceReadError(String, String),
    #[error("failure reading file {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("unable to deserialize WKT into geometry: {0}")]
    InvalidWKT(String),
    #[error("row {0} of source '{1}' is invalid: {2}")]
    InvalidRow(usize, String, String),
    #[error("failure reading or writing {0}: {1}")]
    IoError(String, std::io::Error),
    #[error("{0}")]
    InternalError(String),
}
