//! Material model
//!
//! An item on the "Materials Needed" checklist.

use serde::Serialize;
use std::fmt;

/// A material the student should have on hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Material {
    /// Display glyph
    pub icon: &'static str,
    /// Item name
    pub label: &'static str,
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.label)
    }
}
