use crate::constants::{HPO_LINK, OMIM_LINK};
use crate::extract::ReportFrame;
use crate::transform::error::TransformError;
use crate::transform::traits::Strategy;
use log::debug;
use polars::prelude::{NamedFrom, Series};

const HYPERLINK_PREFIX: &str = "=HYPERLINK(";

/// Wraps every URL in the link columns into an Excel `HYPERLINK` formula with
/// the URL as its display text. Nulls stay null and values that already are
/// formulas are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkAnnotator;

impl LinkAnnotator {
    fn link_columns() -> [&'static str; 2] {
        [OMIM_LINK, HPO_LINK]
    }
}

impl Strategy for LinkAnnotator {
    fn is_valid(&self, table: &ReportFrame) -> bool {
        Self::link_columns()
            .iter()
            .all(|col_name| table.has_column(col_name))
    }

    fn internal_transform(&self, table: &mut ReportFrame) -> Result<(), TransformError> {
        let mut replacements = Vec::with_capacity(2);
        for col_name in Self::link_columns() {
            let wrapped: Vec<Option<String>> = table
                .data()
                .column(col_name)?
                .str()?
                .into_iter()
                .map(|url| url.map(hyperlink_formula))
                .collect();
            replacements.push((col_name, Series::new(col_name.into(), wrapped)));
        }

        let mut builder = table.builder();
        for (col_name, series) in replacements {
            builder = builder.replace_col(col_name, series)?;
        }
        let table = builder.build()?;

        debug!("Wrapped link columns of {} into hyperlinks.", table.name());
        Ok(())
    }
}

pub fn hyperlink_formula(url: &str) -> String {
    if url.starts_with(HYPERLINK_PREFIX) {
        return url.to_string();
    }
    let escaped = url.replace('"', "\"\"");
    format!("{HYPERLINK_PREFIX}\"{escaped}\", \"{escaped}\")")
}
