use crate::extract::ReportFrame;
use crate::load::error::LoadError;
use crate::load::traits::Loadable;
use crate::load::utils::{output_path, prepare_parent_dir};
use log::{debug, info};
use polars::prelude::{Column, DataType};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};

const MAX_ROWS: usize = 1_048_576;
const MAX_COLS: usize = 16_384;

/// Writes a report as a single sheet workbook.
///
/// The header row is bold. Strings starting with `=` are written as formulas,
/// which is how the hyperlink columns become clickable. Null cells stay empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExcelLoader {
    create_dir: bool,
}

impl ExcelLoader {
    pub fn new(create_dir: bool) -> Self {
        ExcelLoader { create_dir }
    }

    fn check_dimensions(table: &ReportFrame, path: &Path) -> Result<(), LoadError> {
        let (height, width) = table.data().shape();
        if height + 1 > MAX_ROWS || width > MAX_COLS {
            return Err(LoadError::CantStore {
                path: path.to_path_buf(),
                reason: format!(
                    "{height} rows and {width} columns exceed the worksheet limit of {} rows and {MAX_COLS} columns",
                    MAX_ROWS - 1
                ),
            });
        }
        Ok(())
    }

    fn write_column(
        worksheet: &mut Worksheet,
        col_idx: u16,
        column: &Column,
    ) -> Result<(), LoadError> {
        match column.dtype() {
            DataType::String => {
                for (row_idx, value) in column.str()?.into_iter().enumerate() {
                    if let Some(value) = value {
                        let row = data_row(row_idx);
                        if value.starts_with('=') {
                            worksheet.write_formula(row, col_idx, value)?;
                        } else {
                            worksheet.write_string(row, col_idx, value)?;
                        }
                    }
                }
            }
            DataType::Boolean => {
                for (row_idx, value) in column.bool()?.into_iter().enumerate() {
                    if let Some(value) = value {
                        worksheet.write_boolean(data_row(row_idx), col_idx, value)?;
                    }
                }
            }
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64 => {
                let numbers = column.cast(&DataType::Float64)?;
                for (row_idx, value) in numbers.f64()?.into_iter().enumerate() {
                    if let Some(value) = value {
                        worksheet.write_number(data_row(row_idx), col_idx, value)?;
                    }
                }
            }
            _ => {
                let text = column.cast(&DataType::String)?;
                for (row_idx, value) in text.str()?.into_iter().enumerate() {
                    if let Some(value) = value {
                        worksheet.write_string(data_row(row_idx), col_idx, value)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn write_workbook(table: &ReportFrame, path: &Path) -> Result<(), LoadError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();

        for (col_idx, column) in table.data().get_columns().iter().enumerate() {
            let col_idx = col_idx as u16;
            worksheet.write_string_with_format(0, col_idx, column.name().as_str(), &header_format)?;
            Self::write_column(worksheet, col_idx, column)?;
        }

        workbook.save(path)?;
        Ok(())
    }
}

fn data_row(row_idx: usize) -> u32 {
    (row_idx + 1) as u32
}

impl Loadable for ExcelLoader {
    fn load(&self, table: &ReportFrame, stem: &Path) -> Result<PathBuf, LoadError> {
        let path = output_path(stem, self.extension());
        Self::check_dimensions(table, &path)?;
        prepare_parent_dir(&path, self.create_dir)?;

        debug!("Writing {} rows of {} to {}", table.height(), table.name(), path.display());
        Self::write_workbook(table, &path)?;
        info!("Wrote {}", path.display());
        Ok(path)
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }
}
