use thiserror::Error;

use crate::types::Caption;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionIssue {
    #[error("start or end time is not a finite number")]
    NonFiniteTime,

    #[error("start or end time is negative")]
    NegativeTime,

    #[error("end time is before start time")]
    EndBeforeStart,
}

impl Caption {
    /// Check the timing of a single caption. Formatting never requires this.
    pub fn validate(&self) -> Result<(), CaptionIssue> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(CaptionIssue::NonFiniteTime);
        }
        if self.start < 0.0 || self.end < 0.0 {
            return Err(CaptionIssue::NegativeTime);
        }
        if self.end < self.start {
            return Err(CaptionIssue::EndBeforeStart);
        }
        Ok(())
    }
}

/// Collect every invalid caption as (1-based index, issue)
pub fn validate_captions(captions: &[Caption]) -> Vec<(usize, CaptionIssue)> {
    captions
        .iter()
        .enumerate()
        .filter_map(|(i, caption)| caption.validate().err().map(|issue| (i + 1, issue)))
        .collect()
}
