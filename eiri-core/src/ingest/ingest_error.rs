use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("metrics table is empty")]
    EmptyInput,
    #[error("metrics table has no header row")]
    MissingHeader,
    #[error("country code '{0}' appears in more than one accepted row")]
    DuplicateKey(String),
    #[error("failure reading metrics table: {source}")]
    CsvReadError { source: csv::Error },
    #[error("failure writing metrics table: {source}")]
    CsvWriteError { source: csv::Error },
    #[error("failure writing metrics table: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
