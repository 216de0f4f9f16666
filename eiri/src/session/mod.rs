mod dataset;
mod dataset_loader;
mod selection;

pub use dataset::Dataset;
pub use dataset_loader::DatasetLoader;
pub use selection::Selection;
