use super::IngestError;
use crate::model::CountryMetric;
use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle
/// two accepted rows sharing a country code
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// the later row replaces the earlier one
    #[default]
    LastWins,
    /// the later row is discarded
    FirstWins,
    /// fail the batch with [`IngestError::DuplicateKey`]
    Reject,
}

impl DuplicateKeyPolicy {
    /// reduces records to one per country code.
    ///
    /// the surviving record sits at the position where its key first appeared,
    /// so output order follows source order for both LastWins and FirstWins.
    ///
    /// # Returns
    ///
    /// the unique records and the repeated keys, one entry per repeat.
    pub fn reduce(
        &self,
        records: Vec<CountryMetric>,
    ) -> Result<(Vec<CountryMetric>, Vec<String>), IngestError> {
        let mut by_code: IndexMap<String, CountryMetric> = IndexMap::new();
        let mut duplicates: Vec<String> = vec![];
        for record in records.into_iter() {
            if by_code.contains_key(&record.country_code) {
                log::warn!(
                    "country code '{}' repeated in metrics table, applying {:?}",
                    record.country_code,
                    self
                );
                duplicates.push(record.country_code.clone());
                match self {
                    DuplicateKeyPolicy::LastWins => {
                        by_code.insert(record.country_code.clone(), record);
                    }
                    DuplicateKeyPolicy::FirstWins => {}
                    DuplicateKeyPolicy::Reject => {
                        return Err(IngestError::DuplicateKey(record.country_code))
                    }
                }
            } else {
                by_code.insert(record.country_code.clone(), record);
            }
        }
        Ok((by_code.into_values().collect(), duplicates))
    }
}
