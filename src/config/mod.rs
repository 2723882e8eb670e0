//! Configuration and settings for Bikeshare Report.

mod settings;

pub use settings::{
    resolve_data_path,
    DEFAULT_DATA_PATH,
    DEFAULT_EXPORT_STEM,
    DEFAULT_REFRESH_INTERVAL,
};
