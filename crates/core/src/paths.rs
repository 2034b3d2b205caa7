use std::path::{Path, PathBuf};

use crate::types::TimestampFormat;

const DEFAULT_STEM: &str = "captions";

/// Default directory for saved subtitle files
pub fn get_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Subtitle file name derived from the input file, e.g. `talk.json` -> `talk.srt`
pub fn output_filename(input: &Path, format: TimestampFormat) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_STEM.into());
    format!("{}.{}", stem, format.extension())
}
