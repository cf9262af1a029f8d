//! Command handlers that delegate to `CandyService`.
//!
//! Handlers are thin wrappers that:
//! 1. Parse/validate CLI-specific input
//! 2. Call `CandyService` methods
//! 3. Format output for the terminal

pub mod add;
pub mod list;
pub mod paths;
pub mod remove;
pub mod web;
