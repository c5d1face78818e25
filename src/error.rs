use crate::config::error::ConfigError;
use crate::extract::error::ExtractionError;
use crate::load::error::LoadError;
use crate::transform::error::TransformError;
use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("Could not load the OMIM database at {}", path.display())]
    Database {
        path: PathBuf,
        #[source]
        source: ExtractionError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Load(#[from] LoadError),
}
