use super::Dataset;
use crate::{
    app::EiriAppError,
    config::{MetricsSource, TableSource},
};
use eiri_core::ingest::{normalize, NormalizeOptions};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// loads the session dataset exactly once.
///
/// the first call to [`DatasetLoader::load`] fetches and normalizes the
/// metrics table. calls made while that is in flight wait on it and receive
/// the same dataset, and later calls return it without fetching again.
/// failures never propagate: they are logged and the session gets an empty
/// dataset.
pub struct DatasetLoader<S: TableSource = MetricsSource> {
    source: S,
    options: NormalizeOptions,
    dataset: OnceCell<Arc<Dataset>>,
}

impl<S: TableSource> DatasetLoader<S> {
    pub fn new(source: S, options: NormalizeOptions) -> DatasetLoader<S> {
        DatasetLoader {
            source,
            options,
            dataset: OnceCell::new(),
        }
    }

    pub async fn load(&self) -> Arc<Dataset> {
        self.dataset
            .get_or_init(|| async {
                match self.try_load().await {
                    Ok(dataset) => Arc::new(dataset),
                    Err(e) => {
                        log::error!("failure loading dataset from {}: {e}", self.source);
                        Arc::new(Dataset::empty())
                    }
                }
            })
            .await
            .clone()
    }

    /// the loaded dataset, or an empty one if loading has not finished
    pub fn current(&self) -> Arc<Dataset> {
        self.dataset
            .get()
            .cloned()
            .unwrap_or_else(|| Arc::new(Dataset::empty()))
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.initialized()
    }

    async fn try_load(&self) -> Result<Dataset, EiriAppError> {
        log::info!("loading metrics table from {}", self.source);
        let text = self.source.read_text().await?;
        let normalized = normalize(&text, &self.options)?;
        Ok(Dataset::from(normalized))
    }
}
