mod duplicate_key_policy;
mod ingest_error;
mod normalize_ops;
mod normalize_options;
mod normalize_report;
mod serialize_ops;

pub use duplicate_key_policy::DuplicateKeyPolicy;
pub use ingest_error::IngestError;
pub use normalize_ops::{normalize, read_raw_records, Normalized};
pub use normalize_options::{NormalizeOptions, DEFAULT_MIN_STATIONS};
pub use normalize_report::NormalizeReport;
pub use serialize_ops::{to_csv_string, write_csv, CSV_COLUMNS};
