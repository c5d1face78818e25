use crate::constants::{GENE_SYMBOL, OMIM_GENE, OMIM_ID, OMIM_PHENOTYPE, REPORT_SEPARATOR};
use crate::extract::error::ExtractionError;
use crate::extract::report_frame::ReportFrame;
use crate::extract::traits::Extractable;
use crate::extract::utils::{read_maybe_gzipped, strict_cast_column};
use log::{debug, info};
use polars::io::SerReader;
use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, DataType};
use std::io::Cursor;
use std::path::PathBuf;

/// Columns of the report that carry a fixed type. Every other column stays text.
const TYPED_REPORT_COLUMNS: [(&str, DataType); 4] = [
    (OMIM_ID, DataType::Int64),
    (OMIM_GENE, DataType::String),
    (GENE_SYMBOL, DataType::String),
    (OMIM_PHENOTYPE, DataType::String),
];

/// A tab-separated variant report, optionally gzip-compressed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDataSource {
    pub source: PathBuf,
}

impl ReportDataSource {
    pub fn new(source: PathBuf) -> Self {
        Self { source }
    }

    fn read_raw(&self) -> Result<DataFrame, ExtractionError> {
        let bytes = read_maybe_gzipped(&self.source)?;

        // No schema inference: untouched columns keep their text exactly as exported.
        let data = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_parse_options(CsvParseOptions::default().with_separator(REPORT_SEPARATOR))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        Ok(data)
    }

    fn coerce_typed_columns(&self, mut data: DataFrame) -> Result<DataFrame, ExtractionError> {
        let table_name = self.source.display().to_string();

        if data.column(GENE_SYMBOL).is_err() {
            return Err(ExtractionError::MissingColumn {
                column: GENE_SYMBOL.to_string(),
                table: table_name,
            });
        }

        for (col_name, dtype) in TYPED_REPORT_COLUMNS.iter() {
            if data.column(col_name).is_err() {
                debug!("Report {table_name} has no column {col_name}. Nothing to coerce.");
                continue;
            }
            let casted = strict_cast_column(&data, col_name, dtype, &table_name)?;
            data.with_column(casted)?;
        }

        Ok(data)
    }
}

impl Extractable for ReportDataSource {
    type Table = ReportFrame;

    fn extract(&self) -> Result<ReportFrame, ExtractionError> {
        info!("Attempting to extract report data from: {}", self.source.display());

        let data = self.coerce_typed_columns(self.read_raw()?)?;
        let frame = ReportFrame::new(self.source.display().to_string(), data).map_err(|_| {
            ExtractionError::MissingColumn {
                column: GENE_SYMBOL.to_string(),
                table: self.source.display().to_string(),
            }
        })?;

        info!(
            "Extracted {} rows and {} columns from {}",
            frame.height(),
            frame.data().width(),
            self.source.display()
        );
        Ok(frame)
    }
}
