use crate::config::error::ConfigError;
use crate::config::export_format::ExportFormat;
use crate::validation::config_validation::{validate_output_count, validate_unique_reports};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strum_macros::Display;
use validator::Validate;

/// How the samples of a report relate to each other. Recorded for the log only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FamilyLayout {
    #[default]
    Single,
    Duo,
    Trio,
    Quadro,
}

/// Where one annotated report is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub stem: PathBuf,
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_output_count"))]
pub struct AppendConfig {
    pub database: PathBuf,
    #[validate(custom(function = "validate_unique_reports"))]
    pub reports: Vec<PathBuf>,
    pub export: ExportFormat,
    pub outputs: Vec<String>,
    pub family_layout: FamilyLayout,
    pub create_dirs: bool,
}

impl AppendConfig {
    pub fn new(database: impl Into<PathBuf>, reports: Vec<PathBuf>) -> Self {
        AppendConfig {
            database: database.into(),
            reports,
            ..Default::default()
        }
    }

    /// Checks that the config names everything a run needs.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.database.as_os_str().is_empty() {
            return Err(ConfigError::NoDatabase);
        }
        if self.reports.is_empty() {
            return Err(ConfigError::NoReports);
        }
        self.validate()?;
        Ok(self)
    }

    /// One target per report, in report order.
    ///
    /// Explicit output names are split at the first dot of their file name into
    /// stem and format alias. Names without a dot use the configured export
    /// format. Without output names the stem is the report path with every
    /// extension removed from its file name.
    pub fn output_targets(&self) -> Result<Vec<OutputTarget>, ConfigError> {
        if self.outputs.is_empty() {
            return Ok(self
                .reports
                .iter()
                .map(|report| OutputTarget {
                    stem: split_first_dot(report).0,
                    format: self.export,
                })
                .collect());
        }

        if self.outputs.len() != self.reports.len() {
            return Err(ConfigError::OutputCountMismatch {
                outputs: self.outputs.len(),
                reports: self.reports.len(),
            });
        }

        self.outputs
            .iter()
            .map(|output| {
                let (stem, alias) = split_first_dot(Path::new(output));
                let format = match alias {
                    Some(alias) => ExportFormat::parse(&alias)?,
                    None => self.export,
                };
                Ok(OutputTarget { stem, format })
            })
            .collect()
    }
}

/// Splits the file name of `path` at its first dot. The directory part stays
/// with the stem.
fn split_first_dot(path: &Path) -> (PathBuf, Option<String>) {
    let Some(file_name) = path.file_name().map(|name| name.to_string_lossy()) else {
        return (path.to_path_buf(), None);
    };
    match file_name.split_once('.') {
        Some((stem, extension)) if !stem.is_empty() => {
            (path.with_file_name(stem), Some(extension.to_string()))
        }
        _ => (path.to_path_buf(), None),
    }
}
