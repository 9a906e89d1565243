use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Invalid MM:SS:FF time code: {0}")]
    InvalidTimeCode(String),

    #[error("No usable tracks in the cue sheet")]
    NoTracks,
}

pub type CueResult<T> = Result<T, CueError>;
