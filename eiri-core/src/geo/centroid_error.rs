use thiserror::Error;

#[derive(Error, Debug)]
pub enum CentroidError {
    #[error("centroid table must map country codes to coordinates, found {0}")]
    UnresolvableTableShape(String),
    #[error("centroid for '{code}' cannot be interpreted: {reason}")]
    UnresolvableEntry { code: String, reason: String },
    #[error("failure decoding centroid JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
