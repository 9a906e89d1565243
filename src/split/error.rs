use crate::cue::error::CueError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error(transparent)]
    TemplateError(#[from] indicatif::style::TemplateError),

    #[error("Cannot derive an output base name from {0:?}")]
    NoBaseName(PathBuf),
}

pub type SplitResult<T> = Result<T, SplitError>;
