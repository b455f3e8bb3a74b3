//! Declarative database configuration.
//!
//! [`DbConfig`] mirrors the supported option fields as a plain serde
//! struct, so a configuration can travel as JSON and be turned into a
//! native [`Options`] object in one step. Unknown fields keep their engine
//! defaults.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::options::{Compression, Options};

/// Database configuration in declarative form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Create the database if it does not exist.
    pub create_if_missing: bool,
    /// Fail opening if the database already exists.
    pub error_if_exists: bool,
    /// In-memory write buffer size, in bytes.
    pub write_buffer_size: usize,
    /// Maximum number of open files; `-1` means unlimited.
    pub max_open_files: i32,
    /// Total thread count to tune thread pools for.
    pub parallelism: i32,
    /// Block compression algorithm.
    pub compression: Compression,
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            create_if_missing: false,
            error_if_exists: false,
            write_buffer_size: 64 << 20,
            max_open_files: -1,
            parallelism: 1,
            compression: Compression::Snappy,
        }
    }
}

impl DbConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<DbConfig> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Build a native [`Options`] object applying every field.
    pub fn to_options(&self, engine: &Arc<Engine>) -> Result<Options> {
        let mut options = Options::new(engine)?;
        options.set_create_if_missing(self.create_if_missing)?;
        options.set_error_if_exists(self.error_if_exists)?;
        options.set_write_buffer_size(self.write_buffer_size)?;
        options.set_max_open_files(self.max_open_files)?;
        options.increase_parallelism(self.parallelism)?;
        options.set_compression(self.compression)?;
        Ok(options)
    }
}
