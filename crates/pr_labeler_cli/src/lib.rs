//! `pr-labeler` library exports for testing.
//!
//! Loads the run parameters and pull request context from the GitHub Actions
//! environment and runs the labeling pipeline with the real clients.

pub mod commands;
pub mod config;
pub mod errors;
pub mod event;
