use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A timed text record. Times are in seconds from the start of the media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Caption {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Whisper-style transcript wrapper; only the segments matter here.
#[derive(Debug, Deserialize)]
pub struct Transcript {
    pub segments: Vec<Caption>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    #[default]
    Srt,
    WebVtt,
}

impl TimestampFormat {
    /// Character between seconds and milliseconds.
    pub fn separator(&self) -> char {
        match self {
            TimestampFormat::Srt => ',',
            TimestampFormat::WebVtt => '.',
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TimestampFormat::Srt => "srt",
            TimestampFormat::WebVtt => "vtt",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimestampFormat::Srt => "SRT",
            TimestampFormat::WebVtt => "WebVTT",
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that is not WebVTT is treated as SRT, so parsing never fails.
impl FromStr for TimestampFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("webvtt") || s.eq_ignore_ascii_case("vtt") {
            Ok(TimestampFormat::WebVtt)
        } else {
            Ok(TimestampFormat::Srt)
        }
    }
}
