use crate::constants::{GENE_ID, GENE_ID_OFFSET, HPO_LINK, OMIM_BLOCK_OFFSET, OMIM_ID, OMIM_LINK};
use crate::extract::ReportFrame;
use crate::transform::error::TransformError;
use crate::transform::traits::Strategy;
use log::{debug, info};
use polars::prelude::{Column, DataType, IntoColumn, Series};

/// Places the columns the joiner fills later.
///
/// `OMIM ID`, `OMIM Link` and `HPO Link` land consecutively before the column at
/// `omim_block_offset`, then `Gene ID` before the column at `gene_id_offset`.
/// Both offsets count columns of the frame at the moment of insertion, so the
/// Gene ID offset is applied after the OMIM block has already been placed.
/// Frames that are too narrow get the columns appended instead.
///
/// Reserved columns the report already carries are moved into their slot with
/// their data and dtype. Missing ones are added empty. A frame whose reserved
/// columns are all in place is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNormalizer {
    gene_id_offset: usize,
    omim_block_offset: usize,
}

const OMIM_BLOCK: [&str; 3] = [OMIM_ID, OMIM_LINK, HPO_LINK];

impl SchemaNormalizer {
    pub fn new(gene_id_offset: usize, omim_block_offset: usize) -> Self {
        Self {
            gene_id_offset,
            omim_block_offset,
        }
    }

    /// Positions of the OMIM block start and of `Gene ID` for a frame with
    /// `width` non-reserved columns.
    fn slots(&self, width: usize) -> (usize, usize) {
        let block_start = self.omim_block_offset.min(width);
        let gene_id_pos = self.gene_id_offset.min(width + OMIM_BLOCK.len());
        if gene_id_pos <= block_start {
            (block_start + 1, gene_id_pos)
        } else {
            (block_start, gene_id_pos)
        }
    }

    fn is_normalized(&self, table: &ReportFrame) -> bool {
        let reserved = OMIM_BLOCK.len() + 1;
        let width = table.data().width();
        if width < reserved {
            return false;
        }
        let (block_start, gene_id_pos) = self.slots(width - reserved);
        table.position_of(GENE_ID) == Some(gene_id_pos)
            && OMIM_BLOCK
                .iter()
                .enumerate()
                .all(|(shift, col_name)| table.position_of(col_name) == Some(block_start + shift))
    }

    fn take_or_placeholder(table: &ReportFrame, col_name: &str) -> Column {
        match table.data().column(col_name) {
            Ok(col) => col.clone(),
            Err(_) => Series::full_null(col_name.into(), table.height(), &DataType::String)
                .into_column(),
        }
    }
}

impl Default for SchemaNormalizer {
    fn default() -> Self {
        SchemaNormalizer::new(GENE_ID_OFFSET, OMIM_BLOCK_OFFSET)
    }
}

impl Strategy for SchemaNormalizer {
    fn is_valid(&self, table: &ReportFrame) -> bool {
        let normalized = self.is_normalized(table);
        if normalized {
            debug!("{} is already normalized.", table.name());
        }
        !normalized
    }

    fn internal_transform(&self, table: &mut ReportFrame) -> Result<(), TransformError> {
        let omim_block: Vec<Column> = OMIM_BLOCK
            .iter()
            .map(|col_name| Self::take_or_placeholder(table, col_name))
            .collect();
        let gene_id = Self::take_or_placeholder(table, GENE_ID);
        let present: Vec<&str> = OMIM_BLOCK
            .iter()
            .chain(std::iter::once(&GENE_ID))
            .filter(|col_name| table.has_column(col_name))
            .copied()
            .collect();
        if !present.is_empty() {
            debug!("Moving {present:?} into place in {}", table.name());
        }

        let mut builder = table.builder().drop_cols(&present)?;
        for (shift, col) in omim_block.into_iter().enumerate() {
            builder = builder.insert_col_at(self.omim_block_offset + shift, col)?;
        }
        let table = builder
            .insert_col_at(self.gene_id_offset, gene_id)?
            .build()?;

        info!(
            "Normalized schema of {}. Now {} columns.",
            table.name(),
            table.data().width()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GENE_SYMBOL;
    use polars::prelude::{DataFrame, NamedFrom};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn report_with_width(width: usize) -> ReportFrame {
        let columns: Vec<Column> = (0..width)
            .map(|i| {
                let name = if i == 0 {
                    GENE_SYMBOL.to_string()
                } else {
                    format!("col_{i}")
                };
                Series::new(name.into(), &["ABC", "DEF"]).into_column()
            })
            .collect();
        ReportFrame::new("report.tsv", DataFrame::new(columns).unwrap()).unwrap()
    }

    #[rstest]
    fn test_normalize_wide_report() {
        let mut table = report_with_width(60);
        let original = table.column_names();

        SchemaNormalizer::default().transform(&mut table).unwrap();

        assert_eq!(table.data().width(), 64);
        assert_eq!(table.position_of(GENE_ID), Some(9));
        assert_eq!(table.position_of(OMIM_ID), Some(51));
        assert_eq!(table.position_of(OMIM_LINK), Some(52));
        assert_eq!(table.position_of(HPO_LINK), Some(53));
        // Gene ID sits right before what used to be column 9, the OMIM block before column 50
        assert_eq!(table.column_names()[10], original[9]);
        assert_eq!(table.column_names()[54], original[50]);
        assert_eq!(table.data().column(GENE_ID).unwrap().null_count(), 2);
    }

    #[rstest]
    fn test_normalize_narrow_report_appends() {
        let mut table = report_with_width(5);

        SchemaNormalizer::default().transform(&mut table).unwrap();

        assert_eq!(
            table.column_names()[5..].to_vec(),
            vec![OMIM_ID, OMIM_LINK, HPO_LINK, GENE_ID]
        );
    }

    #[rstest]
    fn test_normalize_between_offsets() {
        let mut table = report_with_width(20);

        SchemaNormalizer::default().transform(&mut table).unwrap();

        assert_eq!(table.position_of(GENE_ID), Some(9));
        assert_eq!(table.position_of(OMIM_ID), Some(21));
        assert_eq!(table.position_of(HPO_LINK), Some(23));
    }

    #[rstest]
    fn test_normalize_is_idempotent() {
        let mut table = report_with_width(60);
        let normalizer = SchemaNormalizer::default();

        normalizer.transform(&mut table).unwrap();
        let once = table.clone();
        assert!(!normalizer.is_valid(&table));
        normalizer.transform(&mut table).unwrap();

        assert_eq!(table, once);
    }

    #[rstest]
    fn test_existing_reserved_column_is_moved_into_block() {
        let mut table = report_with_width(12);
        table
            .builder()
            .insert_col_at(
                2,
                Series::new(OMIM_ID.into(), &[Some(101i64), None]).into_column(),
            )
            .unwrap()
            .build()
            .unwrap();

        SchemaNormalizer::new(1, 4).transform(&mut table).unwrap();

        assert_eq!(table.data().width(), 16);
        assert_eq!(table.position_of(GENE_ID), Some(1));
        assert_eq!(table.position_of(OMIM_ID), Some(5));
        assert_eq!(table.position_of(OMIM_LINK), Some(6));
        assert_eq!(table.position_of(HPO_LINK), Some(7));
        let omim_ids: Vec<Option<i64>> = table
            .data()
            .column(OMIM_ID)
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(omim_ids, vec![Some(101), None]);
    }

    #[rstest]
    fn test_existing_reserved_column_in_wide_report() {
        let mut table = report_with_width(60);
        table
            .builder()
            .insert_col_at(
                2,
                Series::new(OMIM_ID.into(), &[Some(7i64), Some(8)]).into_column(),
            )
            .unwrap()
            .build()
            .unwrap();
        let normalizer = SchemaNormalizer::default();

        normalizer.transform(&mut table).unwrap();

        assert_eq!(table.data().width(), 64);
        assert_eq!(table.position_of(GENE_ID), Some(9));
        assert_eq!(table.position_of(OMIM_ID), Some(51));
        assert_eq!(table.position_of(OMIM_LINK), Some(52));
        assert_eq!(table.position_of(HPO_LINK), Some(53));
        assert!(!normalizer.is_valid(&table));
    }

    #[rstest]
    fn test_narrow_report_is_idempotent() {
        let mut table = report_with_width(5);
        let normalizer = SchemaNormalizer::default();

        normalizer.transform(&mut table).unwrap();
        assert!(!normalizer.is_valid(&table));
    }
}
