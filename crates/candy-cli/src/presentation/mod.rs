//! Shared CLI presentation utilities.

pub mod tables;

pub use tables::{print_separator, truncate_string};
