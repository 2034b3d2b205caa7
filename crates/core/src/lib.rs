//! captionfile core library
//!
//! Renders caption lists as SRT or WebVTT subtitle text and hands the result
//! to a pluggable file-save capability.

pub mod error;
pub mod format;
pub mod paths;
pub mod save;
pub mod source;
pub mod types;
pub mod validate;

// Re-export commonly used items at crate root
pub use error::{CaptionError, Result};
pub use format::{
    DEFAULT_PAD_WIDTH, caption_to_string, format_timestamp, pad_left, render_captions,
    seconds_to_millis,
};
pub use paths::{get_output_dir, output_filename};
pub use save::{
    DataUriSaver, DirectorySaver, FileSaver, SaveLocation, StdoutSaver, data_uri, download,
};
pub use source::{load_captions, parse_captions};
pub use types::{Caption, TimestampFormat, Transcript};
pub use validate::{CaptionIssue, validate_captions};
