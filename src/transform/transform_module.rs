use crate::extract::{OmimTable, ReportFrame};
use crate::transform::error::TransformError;
use crate::transform::link_annotator::LinkAnnotator;
use crate::transform::omim_joiner::{JoinReport, OmimJoiner};
use crate::transform::schema_normalizer::SchemaNormalizer;
use crate::transform::traits::Strategy;

/// Runs the preparing strategies on a report, then joins it against OMIM.
#[derive(Debug)]
pub struct TransformerModule {
    strategies: Vec<Box<dyn Strategy>>,
    joiner: OmimJoiner,
    link_annotator: LinkAnnotator,
}

impl TransformerModule {
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        TransformerModule {
            strategies,
            joiner: OmimJoiner,
            link_annotator: LinkAnnotator,
        }
    }

    pub fn run(
        &self,
        table: &mut ReportFrame,
        omim: &OmimTable,
    ) -> Result<JoinReport, TransformError> {
        for strategy in &self.strategies {
            strategy.transform(table)?;
        }
        self.joiner.join(table, omim)
    }

    /// Copy of `table` with the link columns turned into spreadsheet hyperlinks.
    pub fn hyperlinked(&self, table: &ReportFrame) -> Result<ReportFrame, TransformError> {
        let mut linked = table.clone();
        self.link_annotator.transform(&mut linked)?;
        Ok(linked)
    }
}

impl Default for TransformerModule {
    fn default() -> Self {
        TransformerModule::new(vec![Box::new(SchemaNormalizer::default())])
    }
}

impl PartialEq for TransformerModule {
    fn eq(&self, other: &Self) -> bool {
        self.strategies.len() == other.strategies.len()
            && self
                .strategies
                .iter()
                .zip(other.strategies.iter())
                .all(|(a, b)| format!("{:?}", a) == format!("{:?}", b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        APPROVED_GENE_SYMBOL, ENTREZ_GENE_ID, GENE_ID, GENE_SYMBOL, GENE_SYMBOLS, HPO_LINK,
        MIM_NUMBER, OMIM_ID, OMIM_LINK, PHENOTYPES,
    };
    use polars::df;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn omim_table() -> OmimTable {
        OmimTable::new(
            df!(
                MIM_NUMBER => &[101i64],
                GENE_SYMBOLS => &["ABC"],
                APPROVED_GENE_SYMBOL => &["ABC"],
                ENTREZ_GENE_ID => &[200i64],
                PHENOTYPES => &["disease X"],
            )
            .unwrap(),
        )
        .unwrap()
    }

    #[rstest]
    fn test_run_normalizes_then_joins() {
        let mut table = ReportFrame::new(
            "report.tsv",
            df!(
                "Sample" => &["S1", "S2"],
                GENE_SYMBOL => &["ABC", "ZZZ"],
            )
            .unwrap(),
        )
        .unwrap();

        let join_report = TransformerModule::default()
            .run(&mut table, &omim_table())
            .unwrap();

        assert_eq!(join_report.output_rows, 1);
        assert_eq!(
            table.column_names(),
            vec![
                "Sample",
                GENE_SYMBOL,
                OMIM_ID,
                OMIM_LINK,
                HPO_LINK,
                GENE_ID,
                "OMIM Gene",
                "OMIM Phenotype"
            ]
        );
    }

    #[rstest]
    fn test_hyperlinked_leaves_original_untouched() {
        let mut table = ReportFrame::new("report.tsv", df!(GENE_SYMBOL => &["ABC"]).unwrap())
            .unwrap();
        let module = TransformerModule::default();
        module.run(&mut table, &omim_table()).unwrap();

        let linked = module.hyperlinked(&table).unwrap();

        let url = |frame: &ReportFrame| {
            frame
                .data()
                .column(OMIM_LINK)
                .unwrap()
                .str()
                .unwrap()
                .get(0)
                .map(str::to_string)
        };
        assert_eq!(url(&table), Some("https://omim.org/entry/101".to_string()));
        assert_eq!(
            url(&linked),
            Some(
                "=HYPERLINK(\"https://omim.org/entry/101\", \"https://omim.org/entry/101\")"
                    .to_string()
            )
        );
    }

    #[rstest]
    fn test_eq_compares_strategies() {
        assert_eq!(TransformerModule::default(), TransformerModule::default());
        assert!(TransformerModule::new(vec![]) != TransformerModule::default());
    }
}
