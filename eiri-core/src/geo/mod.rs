mod builtin;
mod centroid;
mod centroid_entry;
mod centroid_error;
mod centroid_table;

pub use builtin::BUILTIN_CENTROIDS;
pub use centroid::Centroid;
pub use centroid_entry::{CentroidEntry, LAT_KEYS, LON_KEYS};
pub use centroid_error::CentroidError;
pub use centroid_table::CentroidTable;
