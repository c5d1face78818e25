use crate::constants::{
    APPROVED_GENE_SYMBOL, ENTREZ_GENE_ID, GENE_ID, GENE_SYMBOL, HPO_GENE_URL, HPO_LINK,
    MIM_NUMBER, OMIM_ENTRY_URL, OMIM_GENE, OMIM_ID, OMIM_LINK, OMIM_PHENOTYPE, PHENOTYPES,
};
use crate::extract::{OmimTable, ReportFrame};
use crate::transform::error::TransformError;
use log::{info, warn};
use polars::prelude::{Column, DataFrame, IdxCa, IdxSize, IntoColumn, NamedFrom, Series};
use std::collections::HashSet;
use std::fmt;

/// What an inner join of one report against the OMIM table did to its rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinReport {
    /// Rows in the report before the join.
    pub report_rows: usize,
    /// Report rows with at least one OMIM match.
    pub matched_rows: usize,
    /// Report rows without a match. These are not part of the output.
    pub unmatched_rows: usize,
    /// Report rows that matched more than one OMIM record.
    pub fanned_out_rows: usize,
    /// Rows in the joined table.
    pub output_rows: usize,
    /// Distinct gene symbols without a match, in order of first appearance.
    pub unmatched_symbols: Vec<String>,
}

impl fmt::Display for JoinReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} report rows matched OMIM ({} dropped, {} fanned out), {} rows written",
            self.matched_rows,
            self.report_rows,
            self.unmatched_rows,
            self.fanned_out_rows,
            self.output_rows
        )
    }
}

/// Inner equi-join of a report with the OMIM table on
/// `Gene Symbol == Approved Gene Symbol`, followed by the derivation of the
/// reserved columns.
///
/// Each report row appears once per matching OMIM record, ordered by report row
/// and then by OMIM row. Columns that the report already has are overwritten in
/// place, others are appended. None of the OMIM columns end up in the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OmimJoiner;

impl OmimJoiner {
    pub fn join(
        &self,
        table: &mut ReportFrame,
        omim: &OmimTable,
    ) -> Result<JoinReport, TransformError> {
        let (report_idx, omim_idx, join_report) = Self::match_rows(table, omim)?;

        let matched_omim = omim.data().take(&omim_idx)?;
        let derived = Self::derive_columns(&matched_omim)?;

        let mut builder = table.builder().take_rows(&report_idx)?;
        for col in derived {
            builder = builder.upsert_col(col)?;
        }
        let table = builder.build()?;

        info!("{}: {join_report}", table.name());
        if !join_report.unmatched_symbols.is_empty() {
            warn!(
                "{}: no OMIM record for {} gene symbols: {:?}",
                table.name(),
                join_report.unmatched_symbols.len(),
                join_report.unmatched_symbols
            );
        }
        Ok(join_report)
    }

    fn match_rows(
        table: &ReportFrame,
        omim: &OmimTable,
    ) -> Result<(IdxCa, IdxCa, JoinReport), TransformError> {
        let symbols = table
            .data()
            .column(GENE_SYMBOL)
            .map_err(|_| TransformError::MissingColumn {
                column: GENE_SYMBOL.to_string(),
                table: table.name().to_string(),
            })?
            .str()?;

        let mut report_idx: Vec<IdxSize> = Vec::with_capacity(symbols.len());
        let mut omim_idx: Vec<IdxSize> = Vec::with_capacity(symbols.len());
        let mut join_report = JoinReport {
            report_rows: symbols.len(),
            ..Default::default()
        };
        let mut seen_unmatched = HashSet::new();

        for (row_idx, symbol) in symbols.into_iter().enumerate() {
            let matches = symbol.map(|s| omim.rows_for(s)).unwrap_or_default();
            match matches.len() {
                0 => {
                    join_report.unmatched_rows += 1;
                    if let Some(s) = symbol
                        && seen_unmatched.insert(s)
                    {
                        join_report.unmatched_symbols.push(s.to_string());
                    }
                }
                n => {
                    join_report.matched_rows += 1;
                    if n > 1 {
                        join_report.fanned_out_rows += 1;
                    }
                    report_idx.extend(std::iter::repeat_n(row_idx as IdxSize, n));
                    omim_idx.extend_from_slice(matches);
                }
            }
        }
        join_report.output_rows = report_idx.len();

        Ok((
            IdxCa::from_vec("report_idx".into(), report_idx),
            IdxCa::from_vec("omim_idx".into(), omim_idx),
            join_report,
        ))
    }

    fn derive_columns(matched_omim: &DataFrame) -> Result<Vec<Column>, TransformError> {
        let renamed = |from: &str, to: &str| -> Result<Column, TransformError> {
            Ok(matched_omim
                .column(from)?
                .as_materialized_series()
                .clone()
                .with_name(to.into())
                .into_column())
        };

        Ok(vec![
            renamed(MIM_NUMBER, OMIM_ID)?,
            renamed(APPROVED_GENE_SYMBOL, OMIM_GENE)?,
            renamed(PHENOTYPES, OMIM_PHENOTYPE)?,
            renamed(ENTREZ_GENE_ID, GENE_ID)?,
            link_column(matched_omim.column(MIM_NUMBER)?, OMIM_ENTRY_URL, OMIM_LINK)?,
            link_column(matched_omim.column(ENTREZ_GENE_ID)?, HPO_GENE_URL, HPO_LINK)?,
        ])
    }
}

/// Builds `<base_url><id>` for every non-null id.
fn link_column(ids: &Column, base_url: &str, name: &str) -> Result<Column, TransformError> {
    let links: Vec<Option<String>> = ids
        .i64()?
        .into_iter()
        .map(|id| id.map(|id| format!("{base_url}{id}")))
        .collect();
    Ok(Series::new(name.into(), links).into_column())
}
