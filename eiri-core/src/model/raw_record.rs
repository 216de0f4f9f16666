use super::{parse_finite, MetricField};
use std::collections::HashMap;

/// how a data row's column count compared with the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowArity {
    Exact,
    /// row had fewer columns, the missing trailing fields were set to ""
    Short { missing: usize },
    /// row had more columns, the excess fields were dropped
    Long { excess: usize },
}

/// one source row keyed by (trimmed) header name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    values: HashMap<String, String>,
}

impl RawRecord {
    /// zips a row positionally against the header.
    ///
    /// # Arguments
    ///
    /// * `headers` - trimmed header tokens
    /// * `fields`  - trimmed row values
    ///
    /// # Returns
    ///
    /// the record along with the arity condition of the row. a repeated header
    /// name keeps the value of its right-most column.
    pub fn from_fields<S: AsRef<str>>(headers: &[String], fields: &[S]) -> (RawRecord, RowArity) {
        let values = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = fields
                    .get(idx)
                    .map(|f| f.as_ref().trim().to_string())
                    .unwrap_or_default();
                (header.clone(), value)
            })
            .collect::<HashMap<_, _>>();
        let arity = match fields.len().cmp(&headers.len()) {
            std::cmp::Ordering::Equal => RowArity::Exact,
            std::cmp::Ordering::Less => RowArity::Short {
                missing: headers.len() - fields.len(),
            },
            std::cmp::Ordering::Greater => RowArity::Long {
                excess: fields.len() - headers.len(),
            },
        };
        (RawRecord { values }, arity)
    }

    /// value of a single column, if the column exists
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// first alias that names an existing column with a non-empty value.
    pub fn first_present(&self, aliases: &[&str]) -> Option<&str> {
        aliases
            .iter()
            .filter_map(|alias| self.get(alias))
            .find(|value| !value.is_empty())
    }

    /// resolves a logical field through its alias list.
    pub fn field(&self, field: MetricField) -> Option<&str> {
        self.first_present(field.aliases())
    }

    /// first alias that names an existing column with a finite numeric value.
    pub fn first_numeric(&self, aliases: &[&str]) -> Option<f64> {
        aliases
            .iter()
            .filter_map(|alias| self.get(alias))
            .find_map(parse_finite)
    }

    /// resolves a numeric field and applies its defaulting policy. an alias
    /// whose value is not a number is skipped like an empty one. text fields
    /// return `None`.
    pub fn numeric(&self, field: MetricField) -> Option<f64> {
        let policy = field.numeric_default()?;
        match self.first_numeric(field.aliases()) {
            Some(value) => Some(value),
            None => policy.apply(None),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_row_pads_with_empty_strings() {
        let (record, arity) =
            RawRecord::from_fields(&headers(&["country_code", "stations", "EIRI"]), &["DE"]);
        assert_eq!(arity, RowArity::Short { missing: 2 });
        assert_eq!(record.get("stations"), Some(""));
        assert_eq!(record.get("EIRI"), Some(""));
    }

    #[test]
    fn test_long_row_drops_excess() {
        let (record, arity) =
            RawRecord::from_fields(&headers(&["country_code"]), &["DE", "extra", "more"]);
        assert_eq!(arity, RowArity::Long { excess: 2 });
        assert_eq!(record.get("country_code"), Some("DE"));
        assert_eq!(record.values.len(), 1);
    }

    #[test]
    fn test_first_present_skips_missing_and_empty() {
        let (record, _) = RawRecord::from_fields(
            &headers(&["lng", "longitude"]),
            &["", "8.5"],
        );
        assert_eq!(record.first_present(&["lon", "lng", "longitude"]), Some("8.5"));
        assert_eq!(record.first_present(&["lon"]), None);
    }

    #[test]
    fn test_first_present_prefers_primary() {
        let (record, _) = RawRecord::from_fields(
            &headers(&["fast_charger_share", "fast_dc_share"]),
            &["0.2", "0.4"],
        );
        assert_eq!(record.field(MetricField::FastChargerShare), Some("0.4"));
    }

    #[test]
    fn test_numeric_skips_unparsable_alias() {
        let (record, _) = RawRecord::from_fields(
            &headers(&["fast_dc_share", "fast_charger_share", "lat", "latitude"]),
            &["abc", "0.27", "north", "46.8"],
        );
        assert_eq!(record.numeric(MetricField::FastChargerShare), Some(0.27));
        assert_eq!(record.numeric(MetricField::Lat), Some(46.8));
        assert_eq!(record.first_numeric(&["fast_dc_share"]), None);
    }

    #[test]
    fn test_numeric_applies_field_policy() {
        let (record, _) =
            RawRecord::from_fields(&headers(&["stations", "cluster"]), &["lots", ""]);
        assert_eq!(record.numeric(MetricField::Stations), Some(0.0));
        assert_eq!(record.numeric(MetricField::Cluster), None);
        assert_eq!(record.numeric(MetricField::Country), None);
    }
}
