use polars::prelude::PolarsError;
use rust_xlsxwriter::XlsxError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error(transparent)]
    Xlsx(#[from] XlsxError),
    #[error("Can't store table at {}: {reason}", path.display())]
    CantStore { path: PathBuf, reason: String },
}
