use super::{EiriAppError, EiriOperation};
use crate::config::DashboardConfig;
use clap::Parser;
use eiri_core::ingest::DuplicateKeyPolicy;

/// command line tool for normalizing EV infrastructure readiness metrics and
/// producing the data behind the dashboard views
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EiriApp {
    #[command(subcommand)]
    pub op: EiriOperation,
    /// dashboard configuration file (.toml or .json)
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// rows must have strictly more stations than this to be kept
    #[arg(long, global = true)]
    pub min_stations: Option<f64>,
    /// gap magnitude separating Balanced from the two leaning quadrants
    #[arg(long, global = true)]
    pub gap_threshold: Option<f64>,
    /// how rows sharing a country code are reduced
    #[arg(long, global = true, value_enum)]
    pub duplicate_policy: Option<DuplicateKeyPolicy>,
}

impl EiriApp {
    /// reads the configuration file, if any, and applies command line overrides
    pub fn dashboard_config(&self) -> Result<DashboardConfig, EiriAppError> {
        let mut conf = match &self.config {
            None => DashboardConfig::default(),
            Some(f) => {
                log::info!("reading dashboard configuration from {f}");
                DashboardConfig::try_from(f.as_str())?
            }
        };
        if let Some(min_stations) = self.min_stations {
            conf.normalize.min_stations = min_stations;
        }
        if let Some(gap_threshold) = self.gap_threshold {
            conf.normalize.gap_threshold = gap_threshold;
        }
        if let Some(policy) = self.duplicate_policy {
            conf.normalize.duplicate_key_policy = policy;
        }
        Ok(conf)
    }

    pub fn run(&self) -> Result<(), EiriAppError> {
        let conf = self.dashboard_config()?;
        self.op.run(&conf)
    }
}
