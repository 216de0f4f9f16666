use super::{output_ops, EiriAppError};
use crate::config::{CentroidSource, DashboardConfig, MetricsSource};
use crate::session::{Dataset, DatasetLoader, Selection};
use crate::view::{
    build_markers, markers_to_geojson, scatter_points, DetailPanel, Rankings, ScatterPoint,
};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum EiriOperation {
    /// normalize a metrics table into canonical country records
    Normalize {
        /// metrics table file or URL, overrides the configured metrics source
        #[arg(long)]
        input: Option<String>,
        /// .csv or .json output file, writes CSV to stdout if omitted
        #[arg(long)]
        output: Option<String>,
    },
    /// write the readiness map markers as a GeoJSON FeatureCollection
    Markers {
        #[arg(long)]
        input: Option<String>,
        /// centroid JSON file or URL, overrides the configured centroid source
        #[arg(long)]
        centroids: Option<String>,
        #[arg(long)]
        output: String,
    },
    /// write the ranking charts and the correlation scatter as JSON
    Rankings {
        #[arg(long)]
        input: Option<String>,
        /// JSON output file, writes to stdout if omitted
        #[arg(long)]
        output: Option<String>,
    },
    /// print the detail panel of one country
    Detail {
        #[arg(long)]
        input: Option<String>,
        #[arg(long)]
        country_code: String,
    },
}

/// the JSON document written by [`EiriOperation::Rankings`]
#[derive(Serialize)]
struct ChartData<'a> {
    #[serde(flatten)]
    rankings: &'a Rankings,
    scatter: &'a [ScatterPoint],
}

impl EiriOperation {
    pub fn run(&self, conf: &DashboardConfig) -> Result<(), EiriAppError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| EiriAppError::RuntimeError(e.to_string()))?;
        runtime.block_on(self.run_async(conf))
    }

    async fn run_async(&self, conf: &DashboardConfig) -> Result<(), EiriAppError> {
        match self {
            EiriOperation::Normalize { input, output } => {
                let dataset = load_dataset(input.as_deref(), conf).await?;
                let format = output_ops::RecordFormat::from_output(output.as_deref())?;
                let encoded = output_ops::encode_records(dataset.records(), format)?;
                output_ops::write_output(output.as_deref(), &encoded)
            }
            EiriOperation::Markers {
                input,
                centroids,
                output,
            } => {
                let dataset = load_dataset(input.as_deref(), conf).await?;
                let centroid_source = match centroids {
                    Some(c) => CentroidSource::from(Some(c.as_str())),
                    None => conf.centroid_source.clone(),
                };
                let table = centroid_source.load().await;
                let markers = build_markers(dataset.records(), &table);
                log::info!("built {} map markers", markers.len());
                let collection = markers_to_geojson(&markers);
                let encoded = output_ops::encode_json(&collection)?;
                output_ops::write_output(Some(output), &encoded)
            }
            EiriOperation::Rankings { input, output } => {
                let dataset = load_dataset(input.as_deref(), conf).await?;
                let rankings =
                    Rankings::build(dataset.records(), conf.top_eiri_count, conf.top_gap_count);
                let scatter = scatter_points(dataset.records());
                let chart_data = ChartData {
                    rankings: &rankings,
                    scatter: &scatter,
                };
                let encoded = output_ops::encode_json(&chart_data)?;
                output_ops::write_output(output.as_deref(), &encoded)
            }
            EiriOperation::Detail {
                input,
                country_code,
            } => {
                let dataset = load_dataset(input.as_deref(), conf).await?;
                let mut selection = Selection::new();
                selection.select(Some(country_code.trim()));
                let panel = DetailPanel::from_selection(&selection, &dataset);
                if panel == DetailPanel::NoSelection {
                    log::warn!("country code '{country_code}' is not in the dataset");
                }
                output_ops::write_output(None, &panel.to_string())
            }
        }
    }
}

/// the command line input wins over the configured metrics source
fn metrics_source(
    input: Option<&str>,
    conf: &DashboardConfig,
) -> Result<MetricsSource, EiriAppError> {
    match (input, &conf.metrics_source) {
        (Some(i), _) => Ok(MetricsSource::from(i)),
        (None, Some(source)) => Ok(source.clone()),
        (None, None) => Err(EiriAppError::ConfigurationError(String::from(
            "no metrics source, provide --input or set metrics_source in the configuration",
        ))),
    }
}

async fn load_dataset(
    input: Option<&str>,
    conf: &DashboardConfig,
) -> Result<Arc<Dataset>, EiriAppError> {
    let source = metrics_source(input, conf)?;
    let loader = DatasetLoader::new(source, conf.normalize.clone());
    let dataset = loader.load().await;
    let report = dataset.report();
    if report.malformed_rows() > 0 {
        log::warn!(
            "{} malformed rows in metrics table ({} short, {} long, {} unreadable)",
            report.malformed_rows(),
            report.short_rows,
            report.long_rows,
            report.unreadable_rows
        );
    }
    Ok(dataset)
}
