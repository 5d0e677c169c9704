//! Export functionality
//!
//! Serializes the guide content for use outside the terminal.

pub mod json;
pub mod yaml;

use serde::Serialize;

use crate::models::{Catalog, Material, Step, GUIDE_TITLE, MATERIALS};

/// Serializable snapshot of the whole guide
#[derive(Debug, Serialize)]
pub struct GuideExport {
    /// Guide heading
    pub title: &'static str,
    /// Steps in order
    pub steps: &'static [Step],
    /// Materials checklist
    pub materials: &'static [Material],
}

impl GuideExport {
    /// Snapshot a catalog together with the materials checklist
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            title: GUIDE_TITLE,
            steps: catalog.steps(),
            materials: &MATERIALS,
        }
    }
}
