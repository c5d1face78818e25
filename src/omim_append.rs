use crate::config::{AppendConfig, FamilyLayout, OutputTarget};
use crate::error::{ConstructionError, PipelineError};
use crate::pipeline::{Pipeline, ReportSummary};
use log::{error, info};
use std::path::PathBuf;

/// Results of a batch run. Failing reports don't stop the others.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub succeeded: Vec<ReportSummary>,
    pub failed: Vec<(PathBuf, PipelineError)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct OmimAppend {
    pipeline: Pipeline,
    jobs: Vec<(PathBuf, OutputTarget)>,
    family_layout: FamilyLayout,
}

impl OmimAppend {
    pub fn new(config: AppendConfig, show_progress: bool) -> Result<Self, ConstructionError> {
        let config = config.validated()?;
        let targets = config.output_targets()?;
        let pipeline = Pipeline::from_config(&config, show_progress)?;

        Ok(OmimAppend {
            pipeline,
            jobs: config.reports.into_iter().zip(targets).collect(),
            family_layout: config.family_layout,
        })
    }

    pub fn run(&self) -> RunSummary {
        info!(
            "Annotating {} reports against {} OMIM records. Family layout: {}",
            self.jobs.len(),
            self.pipeline.omim().height(),
            self.family_layout
        );

        let mut summary = RunSummary::default();
        for (report, target) in &self.jobs {
            match self.pipeline.run(report, target) {
                Ok(report_summary) => summary.succeeded.push(report_summary),
                Err(err) => {
                    error!("Failed to annotate {}: {err}", report.display());
                    summary.failed.push((report.clone(), err));
                }
            }
        }

        info!(
            "Annotated {} of {} reports.",
            summary.succeeded.len(),
            self.jobs.len()
        );
        summary
    }
}

impl TryFrom<AppendConfig> for OmimAppend {
    type Error = ConstructionError;

    fn try_from(config: AppendConfig) -> Result<Self, Self::Error> {
        OmimAppend::new(config, false)
    }
}
