use eiri_core::{geo::CentroidError, ingest::IngestError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EiriAppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("source {location} is unavailable: {message}")]
    SourceUnavailable { location: String, message: String },
    #[error("failure normalizing metrics table: {source}")]
    IngestError {
        #[from]
        source: IngestError,
    },
    #[error("failure loading centroids: {source}")]
    CentroidError {
        #[from]
        source: CentroidError,
    },
    #[error("failure writing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure starting async runtime: {0}")]
    RuntimeError(String),
}
