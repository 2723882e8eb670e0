//! Data access layer for the bike-share dataset.

mod csv_loader;

pub use csv_loader::load_rides;
