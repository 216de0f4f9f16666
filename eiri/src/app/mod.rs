mod eiri_app;
mod eiri_app_error;
mod operation;
mod output_ops;

pub use eiri_app::EiriApp;
pub use eiri_app_error::EiriAppError;
pub use operation::EiriOperation;
