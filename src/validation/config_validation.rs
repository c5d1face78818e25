use crate::config::AppendConfig;
use std::borrow::Cow;
use validator::ValidationError;

pub(crate) fn validate_output_count(config: &AppendConfig) -> Result<(), ValidationError> {
    if config.outputs.is_empty() || config.outputs.len() == config.reports.len() {
        return Ok(());
    }

    let mut error = ValidationError::new("output_count");
    error.add_param(Cow::from("outputs"), &config.outputs.len());
    error.add_param(Cow::from("reports"), &config.reports.len());
    Err(error.with_message(Cow::Owned(format!(
        "Got {} output names for {} report files. Provide exactly one output name per report or none at all.",
        config.outputs.len(),
        config.reports.len()
    ))))
}

pub(crate) fn validate_unique_reports(reports: &[std::path::PathBuf]) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    let duplicates: Vec<String> = reports
        .iter()
        .filter(|path| !seen.insert(*path))
        .map(|path| path.display().to_string())
        .collect();

    if duplicates.is_empty() {
        return Ok(());
    }

    let mut error = ValidationError::new("duplicates");
    error.add_param(Cow::from("duplicates"), &duplicates);
    Err(error.with_message(Cow::Borrowed("Found duplicate report files")))
}
