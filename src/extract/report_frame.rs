use crate::validation::report_frame_validation::validate_gene_symbol_column;
use log::debug;
use polars::prelude::{Column, DataFrame, IdxCa, PolarsError, Series};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// A report table together with the name of the file it was read from.
///
/// Column order is part of the contract of this type. All schema changes go
/// through [`ReportFrameBuilder`], which validates the frame again once it is
/// finalized.
#[derive(Clone, Validate, Default, Debug, PartialEq)]
#[validate(schema(function = "validate_gene_symbol_column"))]
pub struct ReportFrame {
    name: String,
    data: DataFrame,
}

impl ReportFrame {
    pub fn new(name: impl Into<String>, data: DataFrame) -> Result<Self, ValidationErrors> {
        let frame = ReportFrame {
            name: name.into(),
            data,
        };
        frame.validate()?;
        Ok(frame)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn position_of(&self, col_name: &str) -> Option<usize> {
        self.data.get_column_index(col_name)
    }

    pub fn has_column(&self, col_name: &str) -> bool {
        self.position_of(col_name).is_some()
    }

    pub fn builder(&mut self) -> ReportFrameBuilder<'_> {
        ReportFrameBuilder::new(self)
    }
}

#[must_use = "Builder must be finalized with .build()"]
#[derive(Debug)]
pub struct ReportFrameBuilder<'a> {
    frame: &'a mut ReportFrame,
}

impl<'a> ReportFrameBuilder<'a> {
    pub fn new(frame: &'a mut ReportFrame) -> Self {
        Self { frame }
    }

    /// Inserts `col` before the column currently at `index`. An index past the
    /// last column appends instead.
    pub fn insert_col_at(self, index: usize, col: Column) -> Result<Self, FrameBuilderError> {
        let index = index.min(self.frame.data.width());
        debug!(
            "Inserting column '{}' at position {index} in {}",
            col.name(),
            self.frame.name
        );
        self.frame.data.insert_column(index, col)?;
        Ok(self)
    }

    /// Replaces the column with the same name in place, or appends it.
    pub fn upsert_col(self, col: Column) -> Result<Self, FrameBuilderError> {
        self.frame.data.with_column(col)?;
        Ok(self)
    }

    pub fn replace_col(
        self,
        col_name: &str,
        replacement_data: Series,
    ) -> Result<Self, FrameBuilderError> {
        self.frame.data.replace(col_name, replacement_data)?;
        Ok(self)
    }

    pub fn drop_cols(self, col_names: &[&str]) -> Result<Self, FrameBuilderError> {
        for col_name in col_names {
            self.frame.data.drop_in_place(col_name)?;
        }
        Ok(self)
    }

    pub fn rename_col(self, col_name: &str, new_name: &str) -> Result<Self, FrameBuilderError> {
        self.frame.data.rename(col_name, new_name.into())?;
        Ok(self)
    }

    /// Keeps only the rows at `indices`, in the given order. Indices may repeat.
    pub fn take_rows(self, indices: &IdxCa) -> Result<Self, FrameBuilderError> {
        self.frame.data = self.frame.data.take(indices)?;
        Ok(self)
    }

    pub fn build(self) -> Result<&'a mut ReportFrame, FrameBuilderError> {
        self.frame.validate()?;
        Ok(self.frame)
    }
}

#[derive(Debug, Error)]
pub enum FrameBuilderError {
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}
