//! Step model
//!
//! A single entry in the guide: what to do, an icon for the tracker, and a
//! short list of tips.

use serde::Serialize;
use std::fmt;

/// One step of the study workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Short label, already numbered (e.g. "1. Set Up")
    pub title: &'static str,
    /// Display glyph shown on the tracker marker
    pub icon: &'static str,
    /// Explanatory body text
    pub content: &'static str,
    /// Advisory tips, rendered in order
    pub tips: &'static [&'static str],
}

impl Step {
    /// Title without the leading "N. " ordinal, for narrow tracker labels
    pub fn short_title(&self) -> &'static str {
        match self.title.split_once(". ") {
            Some((prefix, rest)) if prefix.chars().all(|c| c.is_ascii_digit()) => rest,
            _ => self.title,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.title)
    }
}
