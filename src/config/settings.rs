//! Application settings and path constants.

use std::path::PathBuf;

use anyhow::Result;


/// Default refresh interval for the live dashboard (seconds).
pub const DEFAULT_REFRESH_INTERVAL: u64 = 5;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/all_data.csv";

/// Default export file stem; the extension follows the chosen format.
pub const DEFAULT_EXPORT_STEM: &str = "bikeshare-report";


/// Resolve the dataset path from an optional CLI override.
pub fn resolve_data_path(override_path: Option<String>) -> Result<PathBuf> {
    let path = override_path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    if !path.exists() {
        anyhow::bail!(
            "Dataset not found at {}. \
             Pass --data <FILE> or place the CSV at the default path.",
            path.display()
        );
    }

    Ok(path)
}
