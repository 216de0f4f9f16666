use super::EiriAppError;
use eiri_core::{ingest, model::CountryMetric};
use serde::Serialize;
use std::{fs::File, io::Write, path::Path};

/// encodings a normalized record set can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Csv,
    Json,
}

impl RecordFormat {
    /// picks the format from the output file extension. stdout gets CSV.
    pub fn from_output(output: Option<&str>) -> Result<RecordFormat, EiriAppError> {
        let extension = output
            .and_then(|o| Path::new(o).extension())
            .and_then(|e| e.to_str());
        match (output, extension) {
            (None, _) => Ok(RecordFormat::Csv),
            (Some(_), Some("csv")) => Ok(RecordFormat::Csv),
            (Some(_), Some("json")) => Ok(RecordFormat::Json),
            (Some(o), _) => Err(EiriAppError::ConfigurationError(format!(
                "unsupported output file type: {o}, expected .csv or .json"
            ))),
        }
    }
}

/// encodes the records in the given format
pub fn encode_records(
    records: &[CountryMetric],
    format: RecordFormat,
) -> Result<String, EiriAppError> {
    match format {
        RecordFormat::Csv => Ok(ingest::to_csv_string(records)?),
        RecordFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

pub fn encode_json<T: Serialize>(value: &T) -> Result<String, EiriAppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// writes to the output file, or stdout when none is given
pub fn write_output(output: Option<&str>, contents: &str) -> Result<(), EiriAppError> {
    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(contents.as_bytes())?;
            log::info!("wrote {path}");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_from_output() {
        assert_eq!(RecordFormat::from_output(None).unwrap(), RecordFormat::Csv);
        assert_eq!(
            RecordFormat::from_output(Some("out/agg.csv")).unwrap(),
            RecordFormat::Csv
        );
        assert_eq!(
            RecordFormat::from_output(Some("agg.json")).unwrap(),
            RecordFormat::Json
        );
        assert!(RecordFormat::from_output(Some("agg.parquet")).is_err());
        assert!(RecordFormat::from_output(Some("agg")).is_err());
    }

    #[test]
    fn test_encode_empty_records() {
        let csv = encode_records(&[], RecordFormat::Csv).unwrap();
        assert!(csv.starts_with("country_code,country,lat,lon"));
        assert_eq!(csv.lines().count(), 1);
        assert_eq!(encode_records(&[], RecordFormat::Json).unwrap(), "[]");
    }
}
