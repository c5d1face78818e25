use crate::extract::ReportFrame;
use crate::load::error::LoadError;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

pub trait Loadable: Debug {
    /// Writes `table` next to `stem`, adding the loader's own extension.
    /// Returns the path of the written file.
    fn load(&self, table: &ReportFrame, stem: &Path) -> Result<PathBuf, LoadError>;

    fn extension(&self) -> &'static str;
}
