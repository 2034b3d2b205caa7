use std::{borrow::Cow, fmt::Display};

use tracing::debug;

use crate::types::{Caption, TimestampFormat};

pub const DEFAULT_PAD_WIDTH: usize = 2;

const WEBVTT_HEADER: &str = "WEBVTT\n\n";

/// Left-pad the decimal form of `value` with zeros up to `length` characters
pub fn pad_left(value: impl Display, length: usize) -> String {
    format!("{:0>length$}", value.to_string())
}

/// Convert caption seconds to whole milliseconds, rounding down.
/// Negative and NaN inputs saturate to zero, `+inf` to `u64::MAX`.
pub fn seconds_to_millis(seconds: f64) -> u64 {
    (seconds * 1000.0).floor() as u64
}

/// Format milliseconds as HH:MM:SS,mmm (SRT) or HH:MM:SS.mmm (WebVTT).
/// Hours are not wrapped at 24.
pub fn format_timestamp(millis: u64, format: TimestampFormat) -> String {
    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1000) % 60;
    let ms = millis % 1000;

    format!(
        "{}:{}:{}{}{}",
        pad_left(hours, DEFAULT_PAD_WIDTH),
        pad_left(minutes, DEFAULT_PAD_WIDTH),
        pad_left(seconds, DEFAULT_PAD_WIDTH),
        format.separator(),
        pad_left(ms, 3)
    )
}

/// A WebVTT cue payload may not contain blank lines or the `-->` arrow
fn webvtt_payload(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.replace("-->", "--&gt;"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_cues(output: &mut String, captions: &[Caption], format: TimestampFormat) {
    for (i, caption) in captions.iter().enumerate() {
        let start = format_timestamp(seconds_to_millis(caption.start), format);
        let end = format_timestamp(seconds_to_millis(caption.end), format);
        let text = match format {
            TimestampFormat::Srt => Cow::Borrowed(caption.text.as_str()),
            TimestampFormat::WebVtt => Cow::Owned(webvtt_payload(&caption.text)),
        };
        output.push_str(&format!("{}\n{} --> {}\n{}\n\n", i + 1, start, end, text));
    }
}

/// Render captions as SRT blocks numbered from 1.
///
/// Always uses SRT separators; see [`render_captions`] for WebVTT.
pub fn caption_to_string(captions: &[Caption]) -> String {
    let mut output = String::new();
    write_cues(&mut output, captions, TimestampFormat::Srt);
    output
}

/// Render a complete subtitle document in the requested format.
///
/// WebVTT cue text drops blank lines and escapes `-->`; SRT text is written as-is.
pub fn render_captions(captions: &[Caption], format: TimestampFormat) -> String {
    debug!(count = captions.len(), %format, "rendering captions");
    match format {
        TimestampFormat::Srt => caption_to_string(captions),
        TimestampFormat::WebVtt => {
            let mut output = String::from(WEBVTT_HEADER);
            write_cues(&mut output, captions, format);
            output
        }
    }
}
