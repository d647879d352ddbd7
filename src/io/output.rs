//! Output folder resolution for tile runs
//!
//! Each run writes into `<base>/image_tiles_<YYYYMMDD_HHMMSS>`, where the base is
//! `~/Desktop` unless overridden. Two runs within the same second share a folder
//! and the later run overwrites files of the same name.

use crate::io::configuration::{DESKTOP_DIR_NAME, OUTPUT_FOLDER_PREFIX, TIMESTAMP_FORMAT};
use crate::io::error::{Result, TileError};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// The `Desktop` folder inside the user's home directory
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined
pub fn desktop_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DESKTOP_DIR_NAME))
        .ok_or(TileError::MissingHomeDirectory)
}

/// Name of the run folder for a given moment, e.g. `image_tiles_20240131_235959`
pub fn run_folder_name<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{OUTPUT_FOLDER_PREFIX}{}",
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Create (or reuse) the run folder under `base`, including missing parents
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn create_run_folder<Tz>(base: &Path, timestamp: &DateTime<Tz>) -> Result<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let out_dir = base.join(run_folder_name(timestamp));
    std::fs::create_dir_all(&out_dir).map_err(|e| TileError::FileSystem {
        path: out_dir.clone(),
        operation: "create directory",
        source: e,
    })?;
    Ok(out_dir)
}
