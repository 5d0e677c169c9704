//! Core data models for the study guide
//!
//! The guide content is static: an ordered catalog of steps and a fixed
//! checklist of materials, both compiled into the binary.

pub mod catalog;
pub mod material;
pub mod step;

pub use catalog::{Catalog, GUIDE_TITLE, MATERIALS, STEPS};
pub use material::Material;
pub use step::Step;
