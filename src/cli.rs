use crate::config::error::ConfigError;
use crate::config::{AppendConfig, ConfigLoader, ExportFormat, FamilyLayout};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "omim-append",
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None)]
pub struct Cli {
    /// Report files, tab separated and optionally gzipped.
    #[arg(short = 'f', long = "file", num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// OMIM gene map spreadsheet.
    #[arg(short = 'd', long)]
    pub database: Option<PathBuf>,

    /// excel, xlsx, xls for spreadsheets or table, tsv, tab for gzipped tables. [default: xlsx]
    #[arg(short = 'e', long)]
    pub export: Option<String>,

    /// One output name per report. The part after the first dot selects the format.
    #[arg(short = 'o', long = "output", num_args = 1..)]
    pub outputs: Vec<String>,

    /// Config file (yaml, json, toml or ron) with the same fields. Flags take precedence.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Create missing output directories.
    #[arg(long)]
    pub create_dirs: bool,

    /// Only log warnings and hide progress spinners.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[arg(long, conflicts_with_all = ["trio", "quadro"])]
    pub duo: bool,

    #[arg(long, conflicts_with_all = ["duo", "quadro"])]
    pub trio: bool,

    #[arg(long, conflicts_with_all = ["duo", "trio"])]
    pub quadro: bool,
}

impl Cli {
    fn family_layout(&self) -> Option<FamilyLayout> {
        match (self.duo, self.trio, self.quadro) {
            (true, _, _) => Some(FamilyLayout::Duo),
            (_, true, _) => Some(FamilyLayout::Trio),
            (_, _, true) => Some(FamilyLayout::Quadro),
            _ => None,
        }
    }

    /// Merges the flags over the config file, if one is given, and validates the result.
    pub fn into_config(self) -> Result<AppendConfig, ConfigError> {
        let family_layout = self.family_layout();
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load::<AppendConfig>(path)?,
            None => AppendConfig::default(),
        };

        if let Some(database) = self.database {
            config.database = database;
        }
        if !self.files.is_empty() {
            config.reports = self.files;
        }
        if let Some(export) = &self.export {
            config.export = ExportFormat::parse(export)?;
        }
        if !self.outputs.is_empty() {
            config.outputs = self.outputs;
        }
        if let Some(family_layout) = family_layout {
            config.family_layout = family_layout;
        }
        config.create_dirs |= self.create_dirs;

        config.validated()
    }
}
