mod country_metric;
mod metric_field;
mod numeric_default;
mod quadrant;
mod raw_record;

pub use country_metric::CountryMetric;
pub use metric_field::MetricField;
pub use numeric_default::{parse_finite, NumericDefault, ZERO_DEFAULT};
pub use quadrant::{Quadrant, DEFAULT_GAP_THRESHOLD};
pub use raw_record::{RawRecord, RowArity};
