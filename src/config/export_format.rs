use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// The two kinds of output files. Parsing accepts the aliases users pass on the
/// command line, with or without a leading dot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum ExportFormat {
    #[default]
    #[strum(
        to_string = "xlsx",
        serialize = "excel",
        serialize = ".xlsx",
        serialize = "xls",
        serialize = ".xls"
    )]
    Excel,
    #[strum(
        to_string = "tsv",
        serialize = "table",
        serialize = ".tsv",
        serialize = "tab"
    )]
    Tsv,
}

impl ExportFormat {
    pub fn parse(format: &str) -> Result<Self, ConfigError> {
        ExportFormat::from_str(format.trim())
            .map_err(|_| ConfigError::UnsupportedExportFormat(format.to_string()))
    }

    /// Extension of the written file.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Tsv => "tsv.gz",
        }
    }
}

impl TryFrom<String> for ExportFormat {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ExportFormat::parse(&value)
    }
}

impl From<ExportFormat> for String {
    fn from(value: ExportFormat) -> Self {
        value.to_string()
    }
}
