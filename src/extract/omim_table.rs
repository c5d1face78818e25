use crate::constants::{APPROVED_GENE_SYMBOL, OMIM_COLUMNS};
use crate::extract::error::ExtractionError;
use log::warn;
use polars::prelude::{DataFrame, IdxSize};
use std::collections::HashMap;
use std::sync::Arc;

/// The OMIM reference table, read-only once loaded.
///
/// Alongside the data it keeps an index from approved gene symbol to the rows
/// carrying it, so every report can be joined without rebuilding it.
#[derive(Debug, Clone, Default)]
pub struct OmimTable {
    data: Arc<DataFrame>,
    symbol_index: Arc<HashMap<String, Vec<IdxSize>>>,
}

impl OmimTable {
    pub fn new(data: DataFrame) -> Result<Self, ExtractionError> {
        for col_name in OMIM_COLUMNS {
            if data.column(col_name).is_err() {
                return Err(ExtractionError::MissingColumn {
                    column: col_name.to_string(),
                    table: "OMIM".to_string(),
                });
            }
        }

        let mut symbol_index: HashMap<String, Vec<IdxSize>> = HashMap::new();
        for (row_idx, symbol) in data.column(APPROVED_GENE_SYMBOL)?.str()?.into_iter().enumerate() {
            if let Some(symbol) = symbol {
                symbol_index
                    .entry(symbol.to_string())
                    .or_default()
                    .push(row_idx as IdxSize);
            }
        }

        let table = OmimTable {
            data: Arc::new(data),
            symbol_index: Arc::new(symbol_index),
        };

        let duplicated = table.duplicated_symbols();
        if !duplicated.is_empty() {
            warn!(
                "{} approved gene symbols appear on more than one OMIM row. Reports will fan out on them: {:?}",
                duplicated.len(),
                duplicated
            );
        }

        Ok(table)
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Row indices whose approved gene symbol equals `symbol`.
    pub fn rows_for(&self, symbol: &str) -> &[IdxSize] {
        self.symbol_index
            .get(symbol)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Approved gene symbols that occur on more than one row, sorted.
    pub fn duplicated_symbols(&self) -> Vec<&str> {
        let mut duplicated: Vec<&str> = self
            .symbol_index
            .iter()
            .filter(|(_, rows)| rows.len() > 1)
            .map(|(symbol, _)| symbol.as_str())
            .collect();
        duplicated.sort_unstable();
        duplicated
    }
}
