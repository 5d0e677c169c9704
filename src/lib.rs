//! Study Guide - a terminal step-by-step guide for studying AP Statistics
//!
//! The guide walks a student through a fixed, five-step workflow for learning
//! from a video with an AI tutor. A single bounded index selects the current
//! step; the TUI renders a clickable progress tracker, the step's details,
//! a materials checklist and previous/next controls.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The static step catalog and materials checklist
//! - `navigation`: The bounded step cursor
//! - `display`: Plain-text rendering for CLI output
//! - `export`: JSON and YAML export of the guide content
//! - `cli`: CLI command handlers
//! - `tui`: The interactive terminal interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use study_guide::navigation::Navigator;
//!
//! let mut nav = Navigator::default();
//! nav.go_to_next();
//! assert_eq!(nav.current_step().title, "2. Prepare Grok");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod tui;

pub use error::{GuideError, GuideResult};
pub use navigation::Navigator;
