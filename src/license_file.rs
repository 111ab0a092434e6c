use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

pub const LICENSE_EXTENSION: &str = "lic";

pub fn default_license_path(serial_number: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", serial_number, LICENSE_EXTENSION))
}

/// Writes the license verbatim, replacing any existing file.
pub fn write_license_file(path: &Path, license: &str) -> std::io::Result<()> {
    debug!("Creating output file {}", path.display());
    let mut file = File::create(path)?;
    file.write_all(license.as_bytes())?;
    file.flush()?;
    return Ok(());
}
