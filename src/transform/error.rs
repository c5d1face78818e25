use crate::extract::report_frame::FrameBuilderError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Column '{column}' is missing in table {table}.")]
    MissingColumn { column: String, table: String },
    #[error(transparent)]
    Builder(#[from] FrameBuilderError),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
