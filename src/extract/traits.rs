use crate::extract::error::ExtractionError;

/// A trait for sources that can be materialized into an in-memory table.
pub trait Extractable: std::fmt::Debug {
    type Table;

    fn extract(&self) -> Result<Self::Table, ExtractionError>;
}
