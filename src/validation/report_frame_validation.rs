use crate::constants::GENE_SYMBOL;
use crate::extract::ReportFrame;
use polars::prelude::DataType;
use std::borrow::Cow;
use validator::ValidationError;

pub(crate) fn validate_gene_symbol_column(frame: &ReportFrame) -> Result<(), ValidationError> {
    let Some(column) = frame.data().column(GENE_SYMBOL).ok() else {
        let mut error = ValidationError::new("gene_symbol_column");
        error.add_param(Cow::from("table_name"), &frame.name());
        let error_message = format!(
            "Table {} has no '{GENE_SYMBOL}' column to join on.",
            frame.name()
        );
        return Err(error.with_message(Cow::Owned(error_message)));
    };

    if column.dtype() != &DataType::String {
        let mut error = ValidationError::new("gene_symbol_column");
        error.add_param(Cow::from("table_name"), &frame.name());
        let error_message = format!(
            "'{GENE_SYMBOL}' column in table {} is of type {} instead of str.",
            frame.name(),
            column.dtype()
        );
        return Err(error.with_message(Cow::Owned(error_message)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use rstest::rstest;

    #[rstest]
    fn test_string_gene_symbol_column_is_valid() {
        let frame = ReportFrame::new("report.tsv", df!(GENE_SYMBOL => &["A", "B"]).unwrap())
            .unwrap();
        assert!(validate_gene_symbol_column(&frame).is_ok());
    }

    #[rstest]
    fn test_numeric_gene_symbol_column_is_rejected() {
        let data = df!(GENE_SYMBOL => &[1i64, 2]).unwrap();
        assert!(ReportFrame::new("numeric.tsv", data).is_err());
    }
}
