use serde::{Deserialize, Serialize};

/// counts of what [`super::normalize`] coerced or dropped along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    /// non-blank data rows read from the table
    pub rows_read: usize,
    /// rows with fewer columns than the header (padded)
    pub short_rows: usize,
    /// rows with more columns than the header (truncated)
    pub long_rows: usize,
    /// rows the reader could not produce at all
    pub unreadable_rows: usize,
    pub missing_country_code: usize,
    pub below_min_stations: usize,
    /// country codes seen on more than one accepted row, once per repeat
    pub duplicate_keys: Vec<String>,
    pub accepted: usize,
}

impl NormalizeReport {
    /// rows whose arity did not match the header or could not be read
    pub fn malformed_rows(&self) -> usize {
        self.short_rows + self.long_rows + self.unreadable_rows
    }
}
