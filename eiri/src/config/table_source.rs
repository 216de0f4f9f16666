use crate::app::EiriAppError;
use std::{fmt::Display, future::Future};

/// anything the session dataset can be read from
pub trait TableSource: Display {
    /// retrieves the raw table text
    fn read_text(&self) -> impl Future<Output = Result<String, EiriAppError>> + Send;
}
