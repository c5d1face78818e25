use crate::extract::error::ExtractionError;
use calamine::{Data, Range};
use log::{debug, warn};
use polars::datatypes::AnyValue;
use polars::frame::DataFrame;
use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

/// Turns a worksheet range with a header row into a column-oriented `DataFrame`.
pub struct ExcelRangeReader {
    pub range: Range<Data>,
    pub sheet_name: String,
}

impl ExcelRangeReader {
    pub(crate) fn new(range: Range<Data>, sheet_name: impl Into<String>) -> Self {
        ExcelRangeReader {
            range,
            sheet_name: sheet_name.into(),
        }
    }

    pub fn extract_to_df(self) -> Result<DataFrame, ExtractionError> {
        let mut loading_vectors = self.create_loading_vectors();
        self.load_data_to_vectors(&mut loading_vectors)?;
        let columns = self.convert_vectors_to_columns(loading_vectors)?;
        let dataframe = DataFrame::new(columns)?;
        Ok(dataframe)
    }

    fn create_loading_vectors(&'_ self) -> Vec<Vec<AnyValue<'_>>> {
        (0..self.range.width())
            .map(|_| Vec::with_capacity(self.range.height()))
            .collect()
    }

    fn load_data_to_vectors<'a>(
        &'a self,
        loading_vectors: &mut [Vec<AnyValue<'a>>],
    ) -> Result<(), ExtractionError> {
        let sheet_name = self.sheet_name.as_str();
        for (row_index, row) in self.range.rows().enumerate() {
            for (col_index, cell_data) in row.iter().enumerate() {
                let vector_to_load = loading_vectors
                    .get_mut(col_index)
                    .ok_or(ExtractionError::ExcelIndexing(col_index, sheet_name.to_string()))?;

                match *cell_data {
                    Data::Empty => vector_to_load.push(AnyValue::Null),
                    Data::Int(ref i) => vector_to_load.push(AnyValue::Int64(*i)),
                    Data::Bool(ref b) => vector_to_load.push(AnyValue::Boolean(*b)),
                    Data::Error(ref e) => {
                        warn!(
                            "An error {e} in Excel Worksheet {sheet_name} was found at row {row_index}, column {col_index}."
                        );
                        vector_to_load.push(AnyValue::Null)
                    }
                    Data::Float(ref f) => vector_to_load.push(AnyValue::Float64(*f)),
                    Data::DateTime(ref d) => vector_to_load.push(AnyValue::Float64(d.as_f64())),
                    Data::String(ref s) | Data::DateTimeIso(ref s) | Data::DurationIso(ref s) => {
                        vector_to_load.push(AnyValue::String(s))
                    }
                }
            }
        }

        Ok(())
    }

    fn convert_vectors_to_columns(
        &self,
        loading_vectors: Vec<Vec<AnyValue>>,
    ) -> Result<Vec<Column>, ExtractionError> {
        loading_vectors
            .iter()
            .map(|vec| {
                let header = vec
                    .first()
                    .ok_or(ExtractionError::EmptyVector)?
                    .get_str()
                    .ok_or(ExtractionError::NoStringInHeader)?
                    .to_string();
                let data = vec.get(1..).ok_or(ExtractionError::EmptyVector)?;

                // Mixed cells are kept as text, nulls stay nulls.
                let series = Series::from_any_values(header.clone().into(), data, true)
                    .unwrap_or_else(|_| {
                        debug!(
                            "Column {header} in Excel Worksheet {} contained multiple data types. These have been turned into strings.",
                            self.sheet_name
                        );
                        let stringified: Vec<Option<String>> = data
                            .iter()
                            .map(|d| match d {
                                AnyValue::Null => None,
                                AnyValue::String(s) => Some(s.to_string()),
                                AnyValue::Int64(i) => Some(i.to_string()),
                                AnyValue::Float64(f) if f.fract() == 0.0 => {
                                    Some(format!("{}", *f as i64))
                                }
                                other => Some(other.to_string()),
                            })
                            .collect();
                        Series::new(header.as_str().into(), stringified)
                    });

                Ok(series.into_column())
            })
            .collect()
    }
}
