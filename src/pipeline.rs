use crate::config::{AppendConfig, ExportFormat, OutputTarget};
use crate::error::{ConstructionError, PipelineError};
use crate::extract::traits::Extractable;
use crate::extract::{OmimDataSource, OmimTable, ReportDataSource, ReportFrame};
use crate::load::LoaderFactory;
use crate::transform::{JoinReport, TransformerModule};
use crate::utils::spinner;
use log::info;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Outcome of annotating one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub report: PathBuf,
    pub output: PathBuf,
    pub join: JoinReport,
}

/// Extract, transform and load for report files, sharing one OMIM table.
#[derive(Debug)]
pub struct Pipeline {
    omim: OmimTable,
    transformer_module: TransformerModule,
    create_dirs: bool,
    show_progress: bool,
}

impl Pipeline {
    pub fn new(omim: OmimTable, transformer_module: TransformerModule) -> Pipeline {
        Pipeline {
            omim,
            transformer_module,
            create_dirs: false,
            show_progress: false,
        }
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn omim(&self) -> &OmimTable {
        &self.omim
    }

    pub fn run(&self, report: &Path, target: &OutputTarget) -> Result<ReportSummary, PipelineError> {
        let progress = spinner(format!("Annotating {}", report.display()), self.show_progress);
        let summary = self.run_stages(report, target);
        progress.finish_and_clear();
        summary
    }

    fn run_stages(&self, report: &Path, target: &OutputTarget) -> Result<ReportSummary, PipelineError> {
        let mut table = self.extract(report)?;
        let join = self.transform(&mut table)?;
        let output = self.load(&table, target)?;

        Ok(ReportSummary {
            report: report.to_path_buf(),
            output,
            join,
        })
    }

    pub fn extract(&self, report: &Path) -> Result<ReportFrame, PipelineError> {
        info!("Starting extract of {}", report.display());
        let table = ReportDataSource::new(report.to_path_buf()).extract()?;
        info!("Concluded extraction of {}", table.name());
        Ok(table)
    }

    pub fn transform(&self, table: &mut ReportFrame) -> Result<JoinReport, PipelineError> {
        info!("Starting transformation of {}", table.name());
        table.validate()?;

        let join = self.transformer_module.run(table, &self.omim)?;
        info!("Concluded transformation of {}", table.name());
        Ok(join)
    }

    /// Spreadsheets get clickable links, gzipped tables keep the plain URLs.
    pub fn load(&self, table: &ReportFrame, target: &OutputTarget) -> Result<PathBuf, PipelineError> {
        let loader = LoaderFactory::loader(target.format, self.create_dirs);
        let output = match target.format {
            ExportFormat::Excel => {
                let linked = self.transformer_module.hyperlinked(table)?;
                loader.load(&linked, &target.stem)?
            }
            ExportFormat::Tsv => loader.load(table, &target.stem)?,
        };

        info!("Concluded loading of {}", output.display());
        Ok(output)
    }

    /// Loads the OMIM database named in `config` and sets up the default strategies.
    pub fn from_config(config: &AppendConfig, show_progress: bool) -> Result<Pipeline, ConstructionError> {
        let progress = spinner(
            format!("Loading OMIM database {}", config.database.display()),
            show_progress,
        );
        let omim = OmimDataSource::new(config.database.clone()).extract();
        progress.finish_and_clear();
        let omim = omim.map_err(|source| ConstructionError::Database {
            path: config.database.clone(),
            source,
        })?;

        Ok(Pipeline::new(omim, TransformerModule::default())
            .with_create_dirs(config.create_dirs)
            .with_progress(show_progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        APPROVED_GENE_SYMBOL, ENTREZ_GENE_ID, GENE_SYMBOL, GENE_SYMBOLS, MIM_NUMBER, OMIM_ID,
        PHENOTYPES,
    };
    use polars::df;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    #[fixture]
    fn pipeline() -> Pipeline {
        let omim = OmimTable::new(
            df!(
                MIM_NUMBER => &[101i64],
                GENE_SYMBOLS => &["ABC"],
                APPROVED_GENE_SYMBOL => &["ABC"],
                ENTREZ_GENE_ID => &[200i64],
                PHENOTYPES => &["disease X"],
            )
            .unwrap(),
        )
        .unwrap();
        Pipeline::new(omim, TransformerModule::default())
    }

    #[fixture]
    fn temp_dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    fn write_report(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("s1.tsv");
        fs::write(
            &path,
            format!("Sample\t{GENE_SYMBOL}\tVariant\nS1\tABC\tc.1A>G\nS2\tXYZ\tc.2C>T\n"),
        )
        .unwrap();
        path
    }

    #[rstest]
    #[case(ExportFormat::Excel, "s1.xlsx")]
    #[case(ExportFormat::Tsv, "s1.tsv.gz")]
    fn test_run(pipeline: Pipeline, temp_dir: TempDir, #[case] format: ExportFormat, #[case] file: &str) {
        let report = write_report(&temp_dir);
        let target = OutputTarget {
            stem: temp_dir.path().join("s1"),
            format,
        };

        let summary = pipeline.run(&report, &target).unwrap();

        assert_eq!(summary.output, temp_dir.path().join(file));
        assert!(summary.output.exists());
        assert_eq!(summary.join.matched_rows, 1);
        assert_eq!(summary.join.unmatched_symbols, vec!["XYZ".to_string()]);
    }

    #[rstest]
    fn test_transform_joins_report(pipeline: Pipeline, temp_dir: TempDir) {
        let mut table = pipeline.extract(&write_report(&temp_dir)).unwrap();

        pipeline.transform(&mut table).unwrap();

        assert_eq!(table.height(), 1);
        assert_eq!(
            table.data().column(OMIM_ID).unwrap().i64().unwrap().get(0),
            Some(101)
        );
    }

    #[rstest]
    fn test_run_missing_report(pipeline: Pipeline, temp_dir: TempDir) {
        let target = OutputTarget {
            stem: temp_dir.path().join("out"),
            format: ExportFormat::Tsv,
        };

        let result = pipeline.run(&temp_dir.path().join("missing.tsv"), &target);

        assert!(matches!(result, Err(PipelineError::Extraction(_))));
    }

    #[rstest]
    fn test_from_config_with_missing_database(temp_dir: TempDir) {
        let config = AppendConfig::new(temp_dir.path().join("genemap2.xlsx"), vec![]);
        assert!(matches!(
            Pipeline::from_config(&config, false),
            Err(ConstructionError::Database { .. })
        ));
    }
}
