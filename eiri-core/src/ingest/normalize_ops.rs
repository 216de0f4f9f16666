use super::{IngestError, NormalizeOptions, NormalizeReport};
use crate::model::{CountryMetric, RawRecord, RowArity};
use csv::{ReaderBuilder, Trim};
use itertools::Itertools;

/// result of [`normalize`]: the canonical record set and what happened to the
/// rows that did not make it.
#[derive(Clone, Debug, Default)]
pub struct Normalized {
    pub records: Vec<CountryMetric>,
    pub report: NormalizeReport,
}

/// parses and normalizes a metrics table into canonical country records.
///
/// the table is comma-delimited with a header row; fields are never quoted.
/// individual rows never fail the batch: arity mismatches are padded or
/// truncated, unparsable numbers take their field's default, rows without a
/// country code or with too few stations are dropped, and repeated codes are
/// reduced by the configured [`super::DuplicateKeyPolicy`]. all of it is
/// counted in the [`NormalizeReport`].
///
/// # Arguments
///
/// * `raw_text` - contents of the metrics table
/// * `options` - quality threshold, gap threshold and duplicate policy
///
/// # Result
///
/// the records in source order, or an error if the table is empty, has no
/// header, or a duplicate key is rejected.
pub fn normalize(raw_text: &str, options: &NormalizeOptions) -> Result<Normalized, IngestError> {
    let (raw_records, mut report) = read_raw_records(raw_text)?;

    let mut accepted: Vec<CountryMetric> = Vec::with_capacity(raw_records.len());
    for raw in raw_records.iter() {
        let Some(metric) = CountryMetric::from_raw(raw, options.gap_threshold) else {
            report.missing_country_code += 1;
            continue;
        };
        if metric.stations > options.min_stations {
            accepted.push(metric);
        } else {
            log::debug!(
                "dropping {} with {} stations (minimum {})",
                metric.country_code,
                metric.stations,
                options.min_stations
            );
            report.below_min_stations += 1;
        }
    }

    let (records, duplicate_keys) = options.duplicate_key_policy.reduce(accepted)?;
    report.duplicate_keys = duplicate_keys;
    report.accepted = records.len();

    log::info!(
        "normalized {} of {} rows ({} malformed, {} without country code, {} at or below {} stations, {} duplicate)",
        report.accepted,
        report.rows_read,
        report.malformed_rows(),
        report.missing_country_code,
        report.below_min_stations,
        options.min_stations,
        report.duplicate_keys.len()
    );

    Ok(Normalized { records, report })
}

/// splits the table into raw records keyed by header name.
///
/// blank lines are skipped. each header token and each value is trimmed.
///
/// # Result
///
/// the raw records in source order along with a report holding row and arity
/// counts, or an error when there is no header to key the rows by.
pub fn read_raw_records(raw_text: &str) -> Result<(Vec<RawRecord>, NormalizeReport), IngestError> {
    if raw_text.trim().is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(raw_text.as_bytes());

    let headers = reader
        .byte_headers()
        .map_err(|source| IngestError::CsvReadError { source })?
        .iter()
        .map(|h| String::from_utf8_lossy(h).trim().to_string())
        .collect_vec();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(IngestError::MissingHeader);
    }

    let mut report = NormalizeReport::default();
    let mut records = vec![];
    for (row_idx, row) in reader.byte_records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                log::warn!("skipping unreadable row {row_idx}: {e}");
                report.unreadable_rows += 1;
                continue;
            }
        };
        let fields = row
            .iter()
            .map(|f| String::from_utf8_lossy(f).into_owned())
            .collect_vec();
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        report.rows_read += 1;
        let (record, arity) = RawRecord::from_fields(&headers, &fields);
        match arity {
            RowArity::Exact => {}
            RowArity::Short { missing } => {
                log::debug!("row {row_idx} is missing {missing} trailing column(s)");
                report.short_rows += 1;
            }
            RowArity::Long { excess } => {
                log::debug!("row {row_idx} has {excess} column(s) beyond the header, dropping them");
                report.long_rows += 1;
            }
        }
        records.push(record);
    }
    Ok((records, report))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ingest::DuplicateKeyPolicy;
    use std::collections::HashSet;

    const TABLE: &str = "\
country_code, country ,stations,median_power_kw,fast_dc_share,unique_models,coverage_norm,capacity_norm,fastshare_norm,availability_norm,EIRI,cluster
DE,Germany,100,22,0.2,80,70,65,40,60,75,1
FR,France,4000,50,,95,80,72,55,90,70,
NO,Norway,10,150,0.5,60,90,85,95,95,90,2
PT,,51,,,,,,,abc,12,0
";

    fn run(text: &str) -> Normalized {
        normalize(text, &NormalizeOptions::default()).expect("table should normalize")
    }

    #[test]
    fn test_scenario_derived_gap_and_quadrant() {
        let result = run("country_code,stations,EIRI,availability_norm\nDE,100,75,60\n");
        assert_eq!(result.records.len(), 1);
        let de = &result.records[0];
        assert_eq!(de.country_code, "DE");
        assert_eq!(de.stations, 100.0);
        assert_eq!(de.eiri, 75.0);
        assert_eq!(de.availability_norm, 60.0);
        assert!((de.gap_value - -15.0).abs() < 1e-6);
        assert_eq!(de.quadrant, "Infrastructure-Ahead");
    }

    #[test]
    fn test_scenario_below_threshold_is_absent() {
        let result = run(TABLE);
        assert!(result.records.iter().all(|r| r.country_code != "NO"));
        assert_eq!(result.report.below_min_stations, 1);
    }

    #[test]
    fn test_threshold_is_strict() {
        let result = run("country_code,stations\nAA,50\nBB,50.5\n");
        let codes = result.records.iter().map(|r| r.country_code.as_str()).collect_vec();
        assert_eq!(codes, vec!["BB"]);
    }

    #[test]
    fn test_scenario_fast_share_fallback() {
        let result = run("country_code,stations,fast_charger_share\nES,300,0.27\n");
        assert_eq!(result.records[0].fast_charger_share, 0.27);
    }

    #[test]
    fn test_unparsable_primary_alias_falls_back_to_secondary() {
        let result = run("country_code,stations,fast_dc_share,fast_charger_share\nES,300,abc,0.27\n");
        assert_eq!(result.records[0].fast_charger_share, 0.27);
    }

    #[test]
    fn test_unparsable_supplied_gap_reads_as_zero() {
        let result = run("country_code,stations,EIRI,availability_norm,gap_value\nNL,100,50,58,n/a\n");
        assert_eq!(result.records[0].gap_value, 0.0);
        assert_eq!(result.records[0].quadrant, "Balanced");
    }

    #[test]
    fn test_headers_are_trimmed_and_defaults_applied() {
        let result = run(TABLE);
        let pt = result
            .records
            .iter()
            .find(|r| r.country_code == "PT")
            .expect("PT passes the filter");
        assert_eq!(pt.country, "PT");
        assert_eq!(pt.median_power_kw, 0.0);
        assert_eq!(pt.availability_norm, 0.0);
        assert_eq!(pt.cluster, Some(0.0));
        let de = &result.records[0];
        assert_eq!(de.country, "Germany");
        let fr = &result.records[1];
        assert_eq!(fr.fast_charger_share, 0.0);
        assert_eq!(fr.cluster, None);
    }

    #[test]
    fn test_invariants_hold() {
        let result = run(TABLE);
        let codes = result
            .records
            .iter()
            .map(|r| r.country_code.clone())
            .collect::<HashSet<_>>();
        assert_eq!(codes.len(), result.records.len());
        for record in result.records.iter() {
            assert!(!record.country_code.is_empty());
            assert!(record.numeric_values().iter().all(|v| v.is_finite()));
            assert!(record.stations > 50.0);
            assert!((record.gap_value - (record.availability_norm - record.eiri)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_source_order_is_kept() {
        let result = run(TABLE);
        let codes = result.records.iter().map(|r| r.country_code.as_str()).collect_vec();
        assert_eq!(codes, vec!["DE", "FR", "PT"]);
    }

    #[test]
    fn test_arity_mismatches_are_counted_not_fatal() {
        let text = "country_code,stations,EIRI\nDE,100\nFR,200,70,extra\n\n   \nIT,300,60\n";
        let result = run(text);
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.report.rows_read, 3);
        assert_eq!(result.report.short_rows, 1);
        assert_eq!(result.report.long_rows, 1);
        assert_eq!(result.report.malformed_rows(), 2);
        assert_eq!(result.records[0].eiri, 0.0);
        assert_eq!(result.records[1].eiri, 70.0);
    }

    #[test]
    fn test_missing_country_code_is_counted() {
        let result = run("country_code,stations\n,400\nDE,400\n");
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.report.missing_country_code, 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let result = run("country_code,stations,EIRI\r\nDE,100,75\r\n");
        assert_eq!(result.records[0].eiri, 75.0);
    }

    #[test]
    fn test_empty_input_fails() {
        let result = normalize("  \n\n", &NormalizeOptions::default());
        assert!(matches!(result, Err(IngestError::EmptyInput)));
    }

    #[test]
    fn test_blank_header_fails() {
        let result = normalize(" , ,\nDE,1,2\n", &NormalizeOptions::default());
        assert!(matches!(result, Err(IngestError::MissingHeader)));
    }

    #[test]
    fn test_header_only_yields_empty_set() {
        let result = run("country_code,stations\n");
        assert!(result.records.is_empty());
        assert_eq!(result.report.rows_read, 0);
    }

    #[test]
    fn test_duplicates_reported() {
        let text = "country_code,stations\nDE,100\nDE,200\n";
        let result = run(text);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].stations, 200.0);
        assert_eq!(result.report.duplicate_keys, vec![String::from("DE")]);

        let options = NormalizeOptions {
            duplicate_key_policy: DuplicateKeyPolicy::Reject,
            ..Default::default()
        };
        assert!(matches!(
            normalize(text, &options),
            Err(IngestError::DuplicateKey(_))
        ));
    }

    #[test]
    fn test_custom_options() {
        let options = NormalizeOptions {
            min_stations: 0.0,
            gap_threshold: 10.0,
            ..Default::default()
        };
        let result = normalize(
            "country_code,stations,EIRI,availability_norm\nLU,10,50,58\n",
            &options,
        )
        .expect("table should normalize");
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].quadrant, "Balanced");
    }
}
