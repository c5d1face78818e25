use crate::load::error::LoadError;
use std::fs;
use std::path::{Path, PathBuf};

/// `stem` with `.<extension>` appended. Dots that are already part of the stem
/// are kept.
pub(crate) fn output_path(stem: &Path, extension: &str) -> PathBuf {
    let mut file = stem.as_os_str().to_owned();
    file.push(".");
    file.push(extension);
    PathBuf::from(file)
}

pub(crate) fn prepare_parent_dir(path: &Path, create_dir: bool) -> Result<(), LoadError> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }
    if !create_dir {
        return Err(LoadError::CantStore {
            path: path.to_path_buf(),
            reason: format!("directory {} does not exist", parent.display()),
        });
    }
    fs::create_dir_all(parent).map_err(|source| LoadError::Io {
        path: parent.to_path_buf(),
        source,
    })
}
