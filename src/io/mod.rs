//! Input/output: command-line drivers, image files, output folders and terminal feedback

/// Command-line argument parsing and the batch drivers for both tools
pub mod cli;
/// Defaults and fixed output settings
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Source image loading and PNG export
pub mod image;
/// Terminal logger setup
pub mod logging;
/// Timestamped output folder resolution
pub mod output;
/// Progress bar display
pub mod progress;
