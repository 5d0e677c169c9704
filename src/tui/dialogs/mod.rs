//! Dialog views

pub mod help;
