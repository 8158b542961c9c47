//! Configuration for Rowscope.
//!
//! Handles the inspection options a host application can tune: the row
//! window, traversal direction, and whether internal tables are listed.
//! Loads from TOML files with serde defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RowscopeError};

/// Inspection options.
///
/// The limit is unsigned by construction: a negative row window is not
/// representable, so the flattener never has to police it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Maximum number of data rows returned per table window.
    #[serde(default = "default_limit")]
    pub limit: u64,

    /// Traversal direction: `true` walks physical ordinals forward,
    /// `false` walks from the last row backward.
    #[serde(default = "default_ascending")]
    pub ascending: bool,

    /// Whether list-tables responses include internal/meta tables.
    #[serde(default)]
    pub with_meta_tables: bool,
}

fn default_limit() -> u64 {
    250
}

fn default_ascending() -> bool {
    true
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            ascending: default_ascending(),
            with_meta_tables: false,
        }
    }
}

impl InspectorConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RowscopeError::config(format!("Cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&contents)
            .map_err(|e| RowscopeError::config(format!("Invalid config file: {e}")))
    }

    /// Loads from the default path, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Returns the default config file location
    /// (`~/.config/rowscope/config.toml` or the platform equivalent).
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            return config_dir.join("rowscope").join("config.toml");
        }
        std::env::temp_dir().join("rowscope-config.toml")
    }

    /// Sets the row window limit.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the traversal direction.
    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Sets whether meta tables are listed.
    pub fn with_meta_tables(mut self, with_meta_tables: bool) -> Self {
        self.with_meta_tables = with_meta_tables;
        self
    }
}
