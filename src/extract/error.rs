use calamine::Error as CalamineError;
use polars::prelude::{DataType, PolarsError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("File type of {} is not supported.", path.display())]
    UnsupportedFileType { path: PathBuf },
    #[error("Column '{column}' is missing in table {table}.")]
    MissingColumn { column: String, table: String },
    #[error("Could not cast column '{column}' in table {table} from {from} to {to}. {reason}")]
    Casting {
        column: String,
        table: String,
        from: DataType,
        to: DataType,
        reason: String,
    },
    #[error("Workbook {} does not contain any worksheet.", .0.display())]
    EmptyWorkbook(PathBuf),
    #[error("Out of bounds index when loading vector {0} in {1}.")]
    ExcelIndexing(usize, String),
    #[error("Empty vector.")]
    EmptyVector,
    #[error("Header was not a string.")]
    NoStringInHeader,
    #[error("Could not read {}. {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error(transparent)]
    Calamine(#[from] CalamineError),
}
