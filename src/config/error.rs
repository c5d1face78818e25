use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Unsupported export format '{0}'. Use excel, xlsx, xls for spreadsheets or table, tsv, tab for gzipped tables."
    )]
    UnsupportedExportFormat(String),
    #[error(
        "Got {outputs} output names for {reports} report files. Give one output name per report or none."
    )]
    OutputCountMismatch { outputs: usize, reports: usize },
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Loading(#[from] config::ConfigError),
    #[error("No report files given.")]
    NoReports,
    #[error("No OMIM database given.")]
    NoDatabase,
}

impl ConfigError {
    /// Whether the arguments contradict each other, as opposed to naming
    /// something unreadable or unsupported.
    pub fn is_argument_inconsistency(&self) -> bool {
        matches!(
            self,
            ConfigError::OutputCountMismatch { .. }
                | ConfigError::Validation(_)
                | ConfigError::NoReports
                | ConfigError::NoDatabase
        )
    }
}
