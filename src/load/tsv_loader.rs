use crate::constants::REPORT_SEPARATOR;
use crate::extract::ReportFrame;
use crate::load::error::LoadError;
use crate::load::traits::Loadable;
use crate::load::utils::{output_path, prepare_parent_dir};
use flate2::Compression;
use flate2::write::GzEncoder;
use log::{debug, info};
use polars::prelude::{CsvWriter, SerWriter};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes a report as gzip compressed, tab separated text with a header line.
/// Nulls are written as empty fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TsvLoader {
    create_dir: bool,
}

impl TsvLoader {
    pub fn new(create_dir: bool) -> Self {
        TsvLoader { create_dir }
    }

    fn to_tsv_bytes(table: &ReportFrame) -> Result<Vec<u8>, LoadError> {
        let mut data = table.data().clone();
        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer)
            .include_header(true)
            .with_separator(REPORT_SEPARATOR)
            .finish(&mut data)?;
        Ok(buffer)
    }
}

impl Loadable for TsvLoader {
    fn load(&self, table: &ReportFrame, stem: &Path) -> Result<PathBuf, LoadError> {
        let path = output_path(stem, self.extension());
        prepare_parent_dir(&path, self.create_dir)?;
        let io_err = |source| LoadError::Io {
            path: path.clone(),
            source,
        };

        debug!("Writing {} rows of {} to {}", table.height(), table.name(), path.display());
        let tsv = Self::to_tsv_bytes(table)?;
        let file = File::create(&path).map_err(io_err)?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(&tsv).map_err(io_err)?;
        encoder.finish().map_err(io_err)?;

        info!("Wrote {}", path.display());
        Ok(path)
    }

    fn extension(&self) -> &'static str {
        "tsv.gz"
    }
}
