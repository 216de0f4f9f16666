mod centroid_source;
mod dashboard_config;
mod fetch_ops;
mod metrics_source;
mod table_source;

pub use centroid_source::CentroidSource;
pub use dashboard_config::{DashboardConfig, DEFAULT_TOP_EIRI_COUNT, DEFAULT_TOP_GAP_COUNT};
pub use fetch_ops::read_location;
pub use metrics_source::MetricsSource;
pub use table_source::TableSource;
