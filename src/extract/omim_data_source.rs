use crate::constants::{ENTREZ_GENE_ID, MIM_NUMBER, OMIM_COLUMNS};
use crate::extract::error::ExtractionError;
use crate::extract::excel_range_reader::ExcelRangeReader;
use crate::extract::omim_table::OmimTable;
use crate::extract::traits::Extractable;
use crate::extract::utils::{is_spreadsheet, strict_cast_column};
use calamine::{Reader, open_workbook_auto};
use log::info;
use polars::prelude::{DataFrame, DataType};
use std::path::PathBuf;

/// The OMIM gene map workbook (e.g. `genemap2.xlsx`). Only the first worksheet is read.
#[derive(Debug, Clone, PartialEq)]
pub struct OmimDataSource {
    pub source: PathBuf,
}

impl OmimDataSource {
    pub fn new(source: PathBuf) -> Self {
        Self { source }
    }

    fn select_typed_columns(&self, data: &DataFrame) -> Result<DataFrame, ExtractionError> {
        let table_name = self.source.display().to_string();
        let columns = OMIM_COLUMNS
            .iter()
            .map(|col_name| strict_cast_column(data, col_name, &omim_dtype(col_name), &table_name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DataFrame::new(columns)?)
    }
}

fn omim_dtype(col_name: &str) -> DataType {
    match col_name {
        MIM_NUMBER | ENTREZ_GENE_ID => DataType::Int64,
        _ => DataType::String,
    }
}

impl Extractable for OmimDataSource {
    type Table = OmimTable;

    fn extract(&self) -> Result<OmimTable, ExtractionError> {
        info!("Attempting to extract OMIM data from: {}", self.source.display());

        if !is_spreadsheet(&self.source) {
            return Err(ExtractionError::UnsupportedFileType {
                path: self.source.clone(),
            });
        }

        let mut workbook = open_workbook_auto(&self.source)?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ExtractionError::EmptyWorkbook(self.source.clone()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        let sheet_data = ExcelRangeReader::new(range, sheet_name).extract_to_df()?;
        let table = OmimTable::new(self.select_typed_columns(&sheet_data)?)?;

        info!(
            "Extracted {} OMIM records from {}",
            table.height(),
            self.source.display()
        );
        Ok(table)
    }
}
