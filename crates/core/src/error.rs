use thiserror::Error;

use crate::validate::CaptionIssue;

#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("Invalid output filename {filename:?}: must be a plain file name")]
    InvalidFilename { filename: String },

    #[error("Caption {index} is invalid: {issue}")]
    InvalidCaption { index: usize, issue: CaptionIssue },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaptionError>;
