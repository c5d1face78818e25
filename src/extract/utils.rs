use crate::constants::{EXCEL_EXTENSIONS, GZIP_EXTENSION};
use crate::extract::error::ExtractionError;
use flate2::read::MultiGzDecoder;
use log::debug;
use polars::prelude::{Column, DataFrame, DataType};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

pub(crate) fn is_gzipped(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| ext == GZIP_EXTENSION)
}

pub(crate) fn is_spreadsheet(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| EXCEL_EXTENSIONS.contains(&ext.as_str()))
}

/// Reads the whole file into memory, inflating it first if the path ends in `.gz`.
pub(crate) fn read_maybe_gzipped(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    let io_err = |source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut bytes = Vec::new();

    if is_gzipped(path) {
        debug!("Decompressing {}", path.display());
        MultiGzDecoder::new(BufReader::new(file))
            .read_to_end(&mut bytes)
            .map_err(io_err)?;
    } else {
        BufReader::new(file).read_to_end(&mut bytes).map_err(io_err)?;
    }

    Ok(bytes)
}

/// Casts a column and fails if any non-null value can not be represented in `dtype`.
pub(crate) fn strict_cast_column(
    data: &DataFrame,
    col_name: &str,
    dtype: &DataType,
    table_name: &str,
) -> Result<Column, ExtractionError> {
    let column = data
        .column(col_name)
        .map_err(|_| ExtractionError::MissingColumn {
            column: col_name.to_string(),
            table: table_name.to_string(),
        })?;

    if column.dtype() == dtype {
        return Ok(column.clone());
    }

    let casting_err = |reason: String| ExtractionError::Casting {
        column: col_name.to_string(),
        table: table_name.to_string(),
        from: column.dtype().clone(),
        to: dtype.clone(),
        reason,
    };

    if column.dtype().is_float() && dtype.is_integer() {
        let fractional = column
            .cast(&DataType::Float64)
            .map_err(|err| casting_err(err.to_string()))?
            .f64()
            .map_err(|err| casting_err(err.to_string()))?
            .into_iter()
            .flatten()
            .find(|value| value.fract() != 0.0);
        if let Some(value) = fractional {
            return Err(casting_err(format!("{value} is not a whole number")));
        }
    }

    debug!("Trying to cast column: {col_name} to datatype: {dtype:?}");
    column
        .strict_cast(dtype)
        .map_err(|err| casting_err(err.to_string()))
}
