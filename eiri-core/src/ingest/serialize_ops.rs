use super::IngestError;
use crate::model::CountryMetric;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

/// header of a serialized record set. matches the field order of
/// [`CountryMetric`] and only uses names that [`super::normalize`] reads.
pub const CSV_COLUMNS: [&str; 16] = [
    "country_code",
    "country",
    "lat",
    "lon",
    "stations",
    "median_power_kw",
    "fast_charger_share",
    "unique_models",
    "coverage_norm",
    "capacity_norm",
    "fastshare_norm",
    "availability_norm",
    "EIRI",
    "gap_value",
    "Quadrant",
    "cluster",
];

/// writes canonical records as a metrics table that [`super::normalize`] can
/// read back. the header is always written, even for an empty set.
///
/// values are never quoted since the reader does not support quoting.
pub fn write_csv<W: Write>(records: &[CountryMetric], writer: W) -> Result<(), IngestError> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);
    csv_writer
        .write_record(CSV_COLUMNS)
        .map_err(|source| IngestError::CsvWriteError { source })?;
    for record in records.iter() {
        csv_writer
            .serialize(record)
            .map_err(|source| IngestError::CsvWriteError { source })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// [`write_csv`] into a string
pub fn to_csv_string(records: &[CountryMetric]) -> Result<String, IngestError> {
    let mut buffer: Vec<u8> = vec![];
    write_csv(records, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
