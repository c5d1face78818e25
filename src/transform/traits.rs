use crate::extract::ReportFrame;
use crate::transform::error::TransformError;

pub trait Strategy: std::fmt::Debug {
    fn transform(&self, table: &mut ReportFrame) -> Result<(), TransformError> {
        match self.is_valid(table) {
            true => self.internal_transform(table),
            false => Ok(()),
        }
    }

    fn is_valid(&self, table: &ReportFrame) -> bool;

    fn internal_transform(&self, table: &mut ReportFrame) -> Result<(), TransformError>;
}
