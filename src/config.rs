//! Configuration for Tablebook
//!
//! Centralized configuration with sensible defaults. The storage location is
//! passed explicitly into the stores rather than resolved once globally.

use std::path::PathBuf;

use crate::error::{BookingError, Result};

/// Main configuration for a Tablebook instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the backing files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── reservations.json
    ///     └── restaurants.json
    pub data_dir: PathBuf,

    /// File name of the reservation document inside `data_dir`
    pub reservations_file: String,

    /// File name of the restaurant document inside `data_dir`
    pub restaurants_file: String,

    // -------------------------------------------------------------------------
    // Terminal Configuration
    // -------------------------------------------------------------------------
    /// Frame menus and status lines with ANSI colors
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./tablebook_data"),
            reservations_file: "reservations.json".to_string(),
            restaurants_file: "restaurants.json".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the reservation document
    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join(&self.reservations_file)
    }

    /// Full path of the restaurant document
    pub fn restaurants_path(&self) -> PathBuf {
        self.data_dir.join(&self.restaurants_file)
    }

    /// Reject file names that would escape `data_dir` or are empty
    pub fn validate(&self) -> Result<()> {
        for name in [&self.reservations_file, &self.restaurants_file] {
            if name.trim().is_empty() {
                return Err(BookingError::Config("file name must not be empty".to_string()));
            }
            if name == "." || name == ".." {
                return Err(BookingError::Config(format!(
                    "file name '{}' does not name a file",
                    name
                )));
            }
            if name.contains(['/', '\\']) {
                return Err(BookingError::Config(format!(
                    "file name '{}' must not contain path separators",
                    name
                )));
            }
        }
        if self.reservations_file == self.restaurants_file {
            return Err(BookingError::Config(
                "reservations and restaurants must use different files".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all storage)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the reservation document file name
    pub fn reservations_file(mut self, name: impl Into<String>) -> Self {
        self.config.reservations_file = name.into();
        self
    }

    /// Set the restaurant document file name
    pub fn restaurants_file(mut self, name: impl Into<String>) -> Self {
        self.config.restaurants_file = name.into();
        self
    }

    /// Enable or disable ANSI colors
    pub fn color(mut self, enabled: bool) -> Self {
        self.config.color = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
