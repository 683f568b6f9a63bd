//! Data models for PDF Size Adjuster.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - The page size selection offered by the form
//! - The validated scale job handed to the command runner
//! - Output path derivation for a chosen input file

mod enums;
mod jobs;

// Re-export all public types
pub use enums::PageSizeChoice;
pub use jobs::{default_output_path, JobError, ScaleJob};
